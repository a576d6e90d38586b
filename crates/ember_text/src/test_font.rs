//! Builders for minimal synthetic TrueType buffers used across the test
//! modules.

pub(crate) fn name_record(platform_id: u16, name_id: u16, length: u16, offset: u16) -> [u8; 12] {
    let mut record = [0u8; 12];
    record[0..2].copy_from_slice(&platform_id.to_be_bytes());
    // encoding (+2) and language (+4) stay zero
    record[6..8].copy_from_slice(&name_id.to_be_bytes());
    record[8..10].copy_from_slice(&length.to_be_bytes());
    record[10..12].copy_from_slice(&offset.to_be_bytes());
    record
}

pub(crate) fn name_table(records: &[[u8; 12]], storage: &[u8]) -> Vec<u8> {
    let mut table = Vec::new();
    table.extend_from_slice(&0u16.to_be_bytes()); // format
    table.extend_from_slice(&(records.len() as u16).to_be_bytes());
    let string_storage = 6 + records.len() * 12;
    table.extend_from_slice(&(string_storage as u16).to_be_bytes());
    for record in records {
        table.extend_from_slice(record);
    }
    table.extend_from_slice(storage);
    // The parser rejects a string ending exactly at the table boundary, so
    // real storage always needs a byte after it.
    table.push(0);
    table
}

pub(crate) fn font_with_name_table(table: Vec<u8>) -> Vec<u8> {
    let mut font = Vec::new();
    font.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    font.extend_from_slice(&1u16.to_be_bytes()); // numTables
    font.extend_from_slice(&[0; 6]); // searchRange, entrySelector, rangeShift
    font.extend_from_slice(b"name");
    font.extend_from_slice(&0u32.to_be_bytes()); // checksum
    font.extend_from_slice(&28u32.to_be_bytes()); // right after this directory entry
    font.extend_from_slice(&(table.len() as u32).to_be_bytes());
    font.extend_from_slice(&table);
    font
}

/// A valid one-table font whose Macintosh full name is `full_name`.
pub(crate) fn simple_font(full_name: &str) -> Vec<u8> {
    let record = name_record(1, 4, full_name.len() as u16, 0);
    font_with_name_table(name_table(&[record], full_name.as_bytes()))
}
