use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

// See https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6.html
// All multi-byte fields are big-endian.
const VERSION_TRUE: u32 = 0x7472_7565;
const VERSION_1_0: u32 = 0x0001_0000;
const NAME_TABLE_TAG: u32 = 0x6E61_6D65;

const FULL_NAME_ID: u16 = 4;
// Macintosh encoding, so the name bytes are not UTF-16 like the Unicode
// platform's variants.
const MACINTOSH_PLATFORM_ID: u16 = 1;

const NAME_RECORD_SIZE: usize = 12;
const NAME_RECORDS_START: usize = 6;

/// Extracts the full font name embedded in a TrueType file.
///
/// Every failure mode, from an unrecognized version tag to a truncated read
/// or an out-of-bounds string offset, is a plain `None`; a byte blob that
/// is not a font is a normal input here, not an error.
pub fn font_full_name<R: Read + Seek>(reader: &mut R) -> Option<String> {
    parse(reader).unwrap_or(None)
}

/// [`font_full_name`] over a file on disk. The file must be seekable, which
/// is why asset-store fonts are staged to a real file first.
pub fn font_full_name_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    let mut file = File::open(path).ok()?;
    font_full_name(&mut file)
}

fn parse<R: Read + Seek>(reader: &mut R) -> io::Result<Option<String>> {
    let version = read_u32(reader)?;
    if version != VERSION_TRUE && version != VERSION_1_0 {
        return Ok(None);
    }

    let num_tables = read_u16(reader)?;
    // searchRange, entrySelector, rangeShift
    for _ in 0..3 {
        read_u16(reader)?;
    }

    for _ in 0..num_tables {
        let tag = read_u32(reader)?;
        let _checksum = read_u32(reader)?;
        let offset = read_u32(reader)?;
        let length = read_u32(reader)?;

        if tag == NAME_TABLE_TAG {
            reader.seek(SeekFrom::Start(u64::from(offset)))?;
            let mut table = vec![0; length as usize];
            reader.read_exact(&mut table)?;

            return Ok(full_name_from_table(&table));
        }
    }

    Ok(None)
}

/// Scans the name table for the first Macintosh-platform full-name record
/// and decodes its string.
fn full_name_from_table(table: &[u8]) -> Option<String> {
    let count = word_at(table, 2)?;
    let string_storage = usize::from(word_at(table, 4)?);

    for record in 0..usize::from(count) {
        let base = record * NAME_RECORD_SIZE + NAME_RECORDS_START;
        let platform_id = word_at(table, base)?;
        let name_id = word_at(table, base + 6)?;

        if name_id == FULL_NAME_ID && platform_id == MACINTOSH_PLATFORM_ID {
            let length = usize::from(word_at(table, base + 8)?);
            let offset = string_storage + usize::from(word_at(table, base + 10)?);

            if offset + length < table.len() {
                let name = &table[offset..offset + length];
                return Some(String::from_utf8_lossy(name).into_owned());
            }
        }
    }

    None
}

fn word_at(table: &[u8], offset: usize) -> Option<u16> {
    let bytes = table.get(offset..offset + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn read_u16<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::font_full_name;
    use crate::test_font::{font_with_name_table, name_record, name_table, simple_font};

    #[test]
    fn extracts_the_macintosh_full_name() {
        let font = simple_font("TestFont");

        assert_eq!(
            font_full_name(&mut Cursor::new(font)),
            Some("TestFont".to_owned())
        );
    }

    #[test]
    fn unrecognized_version_tag_is_no_name() {
        let mut font = simple_font("TestFont");
        font[..4].copy_from_slice(&0xDEAD_BEEFu32.to_be_bytes());

        assert_eq!(font_full_name(&mut Cursor::new(font)), None);
    }

    #[test]
    fn missing_name_table_is_no_name() {
        let mut font = simple_font("TestFont");
        // Retag the only table as `glyf`.
        font[12..16].copy_from_slice(b"glyf");

        assert_eq!(font_full_name(&mut Cursor::new(font)), None);
    }

    #[test]
    fn out_of_bounds_string_offset_is_no_name() {
        // Record points 200 bytes past the storage the table carries.
        let table = name_table(&[name_record(1, 4, 8, 200)], b"TestFont");
        let font = font_with_name_table(table);

        assert_eq!(font_full_name(&mut Cursor::new(font)), None);
    }

    #[test]
    fn non_macintosh_records_are_skipped() {
        let records = [
            name_record(3, 4, 8, 0), // Windows platform, UTF-16 storage
            name_record(1, 1, 8, 0), // family name, not full name
            name_record(1, 4, 8, 0),
        ];
        let table = name_table(&records, b"TestFont");
        let font = font_with_name_table(table);

        assert_eq!(
            font_full_name(&mut Cursor::new(font)),
            Some("TestFont".to_owned())
        );
    }

    #[test]
    fn truncated_file_is_no_name() {
        let font = simple_font("TestFont");
        let truncated = &font[..20];

        assert_eq!(font_full_name(&mut Cursor::new(truncated)), None);
    }

    #[test]
    fn not_a_font_at_all_is_no_name() {
        assert_eq!(font_full_name(&mut Cursor::new(b"hello".to_vec())), None);
    }
}
