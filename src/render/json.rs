//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::ContentDocument;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::options::{JsonFormat, RenderOptions};

/// Convert the content document to JSON text.
///
/// Non-ASCII characters are written as-is. The text has no trailing newline.
pub fn to_json(doc: &ContentDocument, options: &RenderOptions) -> Result<String> {
    match options.format {
        JsonFormat::Compact => Ok(serde_json::to_string(doc)?),
        JsonFormat::Pretty => {
            let indent = vec![b' '; options.indent];
            let mut out = Vec::new();
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
            doc.serialize(&mut ser)?;
            String::from_utf8(out).map_err(|e| Error::Render(e.to_string()))
        }
    }
}

/// Convert the content document to JSON with default formatting.
pub fn to_json_default(doc: &ContentDocument) -> Result<String> {
    to_json(doc, &RenderOptions::default())
}

/// Render the document and write it to `path`, replacing any existing file.
pub fn write_document(path: impl AsRef<Path>, doc: &ContentDocument, options: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(doc, options)?;
    fs::write(path, &json)?;
    debug!(path = %path.display(), bytes = json.len(), "wrote content document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactItem, InfoItem};

    fn sample() -> ContentDocument {
        let mut doc = ContentDocument::new();
        doc.hero.name = "山田 花子".to_string();
        doc.stack.push("Rust".to_string());
        doc.basic_info.push(InfoItem {
            label: "Home".to_string(),
            value: "Kyoto".to_string(),
        });
        doc.contact.push(ContactItem {
            label: "Email".to_string(),
            value: "a@b.com".to_string(),
            link: "a@b.com".to_string(),
        });
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_default(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"hero\": {\n    \"name\": \"山田 花子\","));
        assert!(json.contains("\"stack\": [\n    \"Rust\"\n  ],"));
        assert!(json.contains("\"memo\": []"));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let json = to_json_default(&sample()).unwrap();
        assert!(json.contains("山田 花子"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_compact() {
        let options = RenderOptions::new().with_format(JsonFormat::Compact);
        let json = to_json(&sample(), &options).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""basicInfo":[{"label":"Home","value":"Kyoto"}]"#));
    }

    #[test]
    fn test_custom_indent() {
        let options = RenderOptions::new().with_indent(4);
        let json = to_json(&ContentDocument::new(), &options).unwrap();
        assert!(json.starts_with("{\n    \"hero\": {\n        \"name\": \"\","));
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = sample();
        let json = to_json_default(&doc).unwrap();
        let parsed: ContentDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_write_document_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "stale content that is longer than the new file").unwrap();

        let doc = ContentDocument::new();
        write_document(&path, &doc, &RenderOptions::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_default(&doc).unwrap());
    }
}
