//! Error types for the contentsheet library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for contentsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the content document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input spreadsheet does not exist.
    #[error("Excel file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input bytes are not a ZIP archive.
    #[error("Not a ZIP archive")]
    NotAnArchive,

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required archive member is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Invalid or malformed data in the worksheet.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A cell references a shared string that does not exist.
    #[error("Shared string index {index} out of range (table has {len} entries)")]
    SharedStringOutOfRange {
        /// Referenced index
        index: usize,
        /// Size of the shared string table
        len: usize,
    },

    /// The worksheet has no data rows below the header.
    #[error("Excel sheet is empty")]
    EmptySheet,

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySheet;
        assert_eq!(err.to_string(), "Excel sheet is empty");

        let err = Error::InputNotFound(PathBuf::from("content.xlsx"));
        assert_eq!(err.to_string(), "Excel file not found: content.xlsx");

        let err = Error::SharedStringOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Shared string index 7 out of range (table has 3 entries)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::ZipArchive(_)));
    }
}
