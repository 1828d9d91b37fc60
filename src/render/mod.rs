//! Output rendering for the content document.
//!
//! # Example
//!
//! ```
//! use contentsheet::render::{to_json, JsonFormat, RenderOptions};
//! use contentsheet::ContentDocument;
//!
//! let doc = ContentDocument::new();
//! let json = to_json(&doc, &RenderOptions::new().with_format(JsonFormat::Compact))?;
//! assert!(json.starts_with(r#"{"hero":"#));
//! # Ok::<(), contentsheet::Error>(())
//! ```

mod json;
mod options;

pub use json::{to_json, to_json_default, write_document};
pub use options::{JsonFormat, RenderOptions};
