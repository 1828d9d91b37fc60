//! ZIP container access for the spreadsheet archive.

use crate::error::{Error, Result};
use crate::model::Row;
use crate::xlsx::{parse_rows, SharedStrings, SHARED_STRINGS_PATH, WORKSHEET_PATH};
use std::cell::RefCell;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

/// ZIP local file header signature: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Rewrite a UTF-16 encoding declaration after the text was transcoded to UTF-8.
fn fix_xml_encoding_declaration(content: String) -> String {
    if !content.starts_with("<?xml") {
        return content;
    }
    let Some(end) = content.find("?>") else {
        return content;
    };

    let (decl, rest) = content.split_at(end + 2);
    let mut fixed = decl.to_string();
    for quote in ['"', '\''] {
        for label in ["UTF-16", "utf-16"] {
            let from = format!("encoding={quote}{label}{quote}");
            let to = format!("encoding={quote}UTF-8{quote}");
            fixed = fixed.replace(&from, &to);
        }
    }
    fixed.push_str(rest);
    fixed
}

/// Decode an XML member, honoring UTF-8 and UTF-16 byte order marks.
///
/// Bytes without a BOM that are not valid UTF-8 are decoded lossily.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(body) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(body.to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }
    if let Some(body) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let text = decode_utf16(body, u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(text));
    }
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let text = decode_utf16(body, u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(text));
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// The spreadsheet file opened as a ZIP archive.
pub struct SpreadsheetArchive {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl SpreadsheetArchive {
    /// Open a spreadsheet archive from a file path.
    ///
    /// A path that does not exist fails with [`Error::InputNotFound`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use contentsheet::container::SpreadsheetArchive;
    ///
    /// let archive = SpreadsheetArchive::open("content.xlsx")?;
    /// let rows = archive.load()?;
    /// # Ok::<(), contentsheet::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        debug!(path = %path.display(), "opening spreadsheet archive");
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Open a spreadsheet archive from its raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if !data.starts_with(&ZIP_MAGIC) {
            return Err(Error::NotAnArchive);
        }
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read a required XML member as text.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        self.read_optional_xml(path)?
            .ok_or_else(|| Error::MissingComponent(path.to_string()))
    }

    /// Read an XML member, returning `None` when the archive lacks it.
    pub fn read_optional_xml(&self, path: &str) -> Result<Option<String>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = match archive.by_name(path) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                debug!(member = path, "archive member absent");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        debug!(member = path, bytes = bytes.len(), "read archive member");
        decode_xml_bytes(&bytes).map(Some)
    }

    /// Decode the first worksheet into dense rows.
    ///
    /// A missing shared string table is treated as empty; a missing worksheet
    /// is an error.
    pub fn load(&self) -> Result<Vec<Row>> {
        let shared_strings = match self.read_optional_xml(SHARED_STRINGS_PATH)? {
            Some(xml) => SharedStrings::parse(&xml)?,
            None => SharedStrings::default(),
        };
        debug!(count = shared_strings.len(), "decoded shared strings");

        let sheet = self.read_xml(WORKSHEET_PATH)?;
        parse_rows(&sheet, &shared_strings)
    }
}

impl std::fmt::Debug for SpreadsheetArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetArchive")
            .field("files", &self.archive.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn archive_with(members: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default();
            for (name, body) in members {
                zip.start_file(*name, options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_open_missing_path() {
        let err = SpreadsheetArchive::open("does/not/exist.xlsx").unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_rejects_non_zip_bytes() {
        let err = SpreadsheetArchive::from_bytes(b"not a zip".to_vec()).unwrap_err();
        assert!(matches!(err, Error::NotAnArchive));
    }

    #[test]
    fn test_truncated_zip_is_archive_error() {
        let mut data = ZIP_MAGIC.to_vec();
        data.extend_from_slice(&[0u8; 16]);
        let err = SpreadsheetArchive::from_bytes(data).unwrap_err();
        assert!(matches!(err, Error::ZipArchive(_)));
    }

    #[test]
    fn test_optional_and_required_members() {
        let data = archive_with(&[("xl/worksheets/sheet1.xml", "<worksheet/>")]);
        let archive = SpreadsheetArchive::from_bytes(data).unwrap();

        assert_eq!(archive.read_optional_xml("xl/sharedStrings.xml").unwrap(), None);
        assert_eq!(
            archive.read_xml("xl/worksheets/sheet1.xml").unwrap(),
            "<worksheet/>"
        );

        let err = archive.read_xml("xl/sharedStrings.xml").unwrap_err();
        assert!(matches!(err, Error::MissingComponent(ref m) if m == "xl/sharedStrings.xml"));
    }

    #[test]
    fn test_load_without_worksheet_fails() {
        let data = archive_with(&[("xl/sharedStrings.xml", "<sst/>")]);
        let archive = SpreadsheetArchive::from_bytes(data).unwrap();
        let err = archive.load().unwrap_err();
        assert!(matches!(err, Error::MissingComponent(_)));
    }

    #[test]
    fn test_decode_xml_bytes() {
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        let utf8_bom = b"\xEF\xBB\xBF<?xml>";
        assert_eq!(decode_xml_bytes(utf8_bom).unwrap(), "<?xml>");

        assert_eq!(decode_xml_bytes("<t>名前</t>".as_bytes()).unwrap(), "<t>名前</t>");
    }

    #[test]
    fn test_utf16_declaration_rewritten() {
        let xml = r#"<?xml version="1.0" encoding="UTF-16"?><sst/>"#;
        let mut bytes = vec![0xFF, 0xFE];
        for unit in xml.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert_eq!(decoded, r#"<?xml version="1.0" encoding="UTF-8"?><sst/>"#);
    }
}
