//! SpreadsheetML decoding.
//!
//! Turns the shared string table and the first worksheet of an `.xlsx`
//! archive into dense rows of cell text.
//!
//! # Example
//!
//! ```
//! use contentsheet::xlsx::{column_index, parse_rows, SharedStrings};
//!
//! let strings = SharedStrings::parse(r#"<sst><si><t>Section</t></si></sst>"#)?;
//! let sheet = r#"<worksheet><sheetData>
//!     <row r="1"><c r="A1" t="s"><v>0</v></c><c r="C1"><v>42</v></c></row>
//! </sheetData></worksheet>"#;
//!
//! let rows = parse_rows(sheet, &strings)?;
//! assert_eq!(rows[0].values(), ["Section", "", "42"]);
//! assert_eq!(column_index("AA7"), 26);
//! # Ok::<(), contentsheet::Error>(())
//! ```

mod reference;
mod shared_strings;
mod worksheet;

pub use reference::{column_index, column_letters, MAX_COLUMN};
pub use shared_strings::SharedStrings;
pub use worksheet::parse_rows;

/// Archive member holding the shared string table.
pub const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";

/// Archive member holding the first worksheet.
pub const WORKSHEET_PATH: &str = "xl/worksheets/sheet1.xml";
