//! XLSX shared strings parsing.

use crate::error::{Error, Result};
use quick_xml::events::Event;

/// Shared strings table.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    /// All strings in order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Parse shared strings from XML content.
    ///
    /// Every `si` item directly under the root yields one entry: the text of
    /// all `t` elements inside it, joined in document order. Whitespace is
    /// kept as written.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut in_si = false;
        let mut in_t = false;
        let mut current_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    match e.local_name().as_ref() {
                        b"si" if depth == 1 => {
                            in_si = true;
                            current_text.clear();
                        }
                        b"t" if in_si => in_t = true,
                        _ => {}
                    }
                    depth += 1;
                }
                Ok(Event::Empty(e)) => {
                    if depth == 1 && e.local_name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                }
                Ok(Event::Text(e)) => {
                    if in_t {
                        current_text.push_str(&e.unescape()?);
                    }
                }
                Ok(Event::CData(e)) => {
                    if in_t {
                        current_text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Ok(Event::End(e)) => {
                    depth = depth.saturating_sub(1);
                    match e.local_name().as_ref() {
                        b"si" if depth == 1 => {
                            strings.push(std::mem::take(&mut current_text));
                            in_si = false;
                        }
                        b"t" => in_t = false,
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Resolve a cell's shared string reference.
    pub fn resolve(&self, index: usize) -> Result<&str> {
        self.get(index).ok_or(Error::SharedStringOutOfRange {
            index,
            len: self.strings.len(),
        })
    }

    /// Get the count of shared strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shared_strings() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="5" uniqueCount="3">
    <si><t>Section</t></si>
    <si><t>Key</t></si>
    <si><t>Value</t></si>
</sst>"#;

        let ss = SharedStrings::parse(xml).unwrap();
        assert_eq!(ss.len(), 3);
        assert_eq!(ss.get(0), Some("Section"));
        assert_eq!(ss.get(1), Some("Key"));
        assert_eq!(ss.get(2), Some("Value"));
        assert_eq!(ss.get(3), None);
    }

    #[test]
    fn test_rich_text_runs_concatenated() {
        let xml = r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <si>
        <r><rPr><b/></rPr><t xml:space="preserve">Hello </t></r>
        <r><t>World</t></r>
    </si>
</sst>"#;

        let ss = SharedStrings::parse(xml).unwrap();
        assert_eq!(ss.len(), 1);
        assert_eq!(ss.get(0), Some("Hello World"));
    }

    #[test]
    fn test_empty_items_keep_positions() {
        let xml = r#"<sst><si/><si><t/></si><si><t>third</t></si></sst>"#;

        let ss = SharedStrings::parse(xml).unwrap();
        assert_eq!(ss.len(), 3);
        assert_eq!(ss.get(0), Some(""));
        assert_eq!(ss.get(1), Some(""));
        assert_eq!(ss.get(2), Some("third"));
    }

    #[test]
    fn test_entities_and_unicode() {
        let xml = r#"<sst><si><t>Tom &amp; Jerry</t></si><si><t>こんにちは</t></si></sst>"#;

        let ss = SharedStrings::parse(xml).unwrap();
        assert_eq!(ss.get(0), Some("Tom & Jerry"));
        assert_eq!(ss.get(1), Some("こんにちは"));
    }

    #[test]
    fn test_prefixed_elements() {
        let xml = r#"<x:sst xmlns:x="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><x:si><x:t>prefixed</x:t></x:si></x:sst>"#;

        let ss = SharedStrings::parse(xml).unwrap();
        assert_eq!(ss.get(0), Some("prefixed"));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let ss = SharedStrings::parse("<sst><si><t>only</t></si></sst>").unwrap();
        assert_eq!(ss.resolve(0).unwrap(), "only");
        let err = ss.resolve(4).unwrap_err();
        assert!(matches!(err, Error::SharedStringOutOfRange { index: 4, len: 1 }));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(SharedStrings::parse("<sst><si><t>x</si></sst>").is_err());
        assert!(SharedStrings::default().is_empty());
    }
}
