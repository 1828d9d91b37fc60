//! # contentsheet
//!
//! Build the site's `content.json` from a content spreadsheet.
//!
//! The first worksheet of an `.xlsx` file holds one entry per row. The header
//! row names the columns; the `Section` column routes each row into a bucket
//! of the [`ContentDocument`], with `Key`, `Value` and `Link` supplying the
//! entry itself.
//!
//! ## Quick Start
//!
//! ```no_run
//! use contentsheet::{build, render::RenderOptions};
//!
//! let doc = build("content.xlsx", "content.json", &RenderOptions::default())?;
//! println!("Stack: {:?}", doc.stack);
//! # Ok::<(), contentsheet::Error>(())
//! ```
//!
//! ## Step by step
//!
//! ```no_run
//! use contentsheet::container::SpreadsheetArchive;
//! use contentsheet::mapping::convert_rows;
//!
//! let rows = SpreadsheetArchive::open("content.xlsx")?.load()?;
//! let doc = convert_rows(&rows)?;
//! let json = contentsheet::render::to_json_default(&doc)?;
//! # Ok::<(), contentsheet::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod mapping;
pub mod model;
pub mod render;
pub mod xlsx;

// Re-exports
pub use container::SpreadsheetArchive;
pub use error::{Error, Result};
pub use mapping::Section;
pub use model::{ContactItem, ContentDocument, Hero, InfoItem, Record, Row};

use render::RenderOptions;
use std::path::Path;
use tracing::info;

/// Convert spreadsheet bytes into the content document.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("content.xlsx")?;
/// let doc = contentsheet::convert_bytes(&data)?;
/// # Ok::<(), contentsheet::Error>(())
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<ContentDocument> {
    let rows = SpreadsheetArchive::from_bytes(data.to_vec())?.load()?;
    mapping::convert_rows(&rows)
}

/// Convert a spreadsheet file into the content document.
///
/// The archive is closed before this returns.
pub fn convert_file(path: impl AsRef<Path>) -> Result<ContentDocument> {
    let rows = {
        let archive = SpreadsheetArchive::open(path)?;
        archive.load()?
    };
    mapping::convert_rows(&rows)
}

/// Convert `input` and write the JSON document to `output`.
///
/// Nothing is written unless the whole conversion succeeds. An existing
/// output file is overwritten.
pub fn build(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<ContentDocument> {
    let input = input.as_ref();
    let output = output.as_ref();

    let doc = convert_file(input)?;
    render::write_document(output, &doc, options)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        "built content document"
    );
    Ok(doc)
}
