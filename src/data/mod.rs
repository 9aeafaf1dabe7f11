/// Data layer: workbook decoding, column mapping, and filtering.
///
/// Architecture:
/// ```text
///  .xls / .xlsx / .xlsm bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first sheet → Vec<SheetRow>  (header → text)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ columns   │  alias resolution, drop unidentified rows → Vec<FlightRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search + status predicates → visible indices
///   └──────────┘
/// ```

pub mod columns;
pub mod filter;
#[cfg(test)]
pub mod fixtures;
pub mod loader;
pub mod model;
