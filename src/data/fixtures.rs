use rust_xlsxwriter::Workbook;

/// xlsx bytes with one sheet holding `rows`; empty strings leave the cell unset.
pub fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// xlsx bytes whose first sheet has no cells at all.
pub fn empty_workbook_bytes() -> Vec<u8> {
    workbook_bytes(&[])
}
