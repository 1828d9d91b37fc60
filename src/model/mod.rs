//! Data model for the conversion.
//!
//! Rows come out of the worksheet, records pair each data row with the
//! header, and the content document is what gets written as JSON.

mod content;
mod record;

pub use content::*;
pub use record::*;
