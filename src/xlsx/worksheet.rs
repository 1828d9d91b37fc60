//! Worksheet cell grid decoding.

use super::reference::{column_index, column_letters, MAX_COLUMN};
use super::shared_strings::SharedStrings;
use crate::error::{Error, Result};
use crate::model::Row;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;
use tracing::debug;

/// Which text node is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Value,
    Inline,
}

/// A `c` element being read.
#[derive(Debug, Default)]
struct PendingCell {
    reference: String,
    cell_type: Option<String>,
    /// Text of the first direct `v` child
    value: Option<String>,
    /// Text of the first `is/t` child
    inline: Option<String>,
}

impl PendingCell {
    fn from_element(e: &BytesStart) -> Self {
        let mut cell = PendingCell {
            reference: "A1".to_string(),
            ..Default::default()
        };
        for attr in e.attributes().flatten() {
            match attr.key.local_name().as_ref() {
                b"r" => cell.reference = String::from_utf8_lossy(&attr.value).to_string(),
                b"t" => cell.cell_type = Some(String::from_utf8_lossy(&attr.value).to_string()),
                _ => {}
            }
        }
        cell
    }

    fn resolve(self, shared_strings: &SharedStrings) -> Result<(usize, String)> {
        let column = column_index(&self.reference);
        if column > MAX_COLUMN {
            return Err(Error::InvalidData(format!(
                "cell {} is beyond the last column {}",
                self.reference,
                column_letters(MAX_COLUMN)
            )));
        }
        let text = match self.cell_type.as_deref() {
            Some("s") => match self.value {
                Some(raw) => {
                    let index = raw.trim().parse::<usize>().map_err(|_| {
                        Error::InvalidData(format!(
                            "cell {} has shared string index {:?}",
                            self.reference, raw
                        ))
                    })?;
                    shared_strings.resolve(index)?.to_string()
                }
                None => String::new(),
            },
            Some("inlineStr") => self.inline.unwrap_or_default(),
            _ => self.value.unwrap_or_default(),
        };
        Ok((column, text))
    }
}

/// Densify sparse cells into a row, or `None` when the row had no cells.
fn densify(cells: BTreeMap<usize, String>) -> Option<Row> {
    let (&max, _) = cells.last_key_value()?;
    let mut values = vec![String::new(); max + 1];
    for (column, text) in cells {
        values[column] = text;
    }
    Some(Row::new(values))
}

/// Parse a worksheet into dense rows.
///
/// Rows are the `row` children of `sheetData`, cells the `c` children of each
/// row, both in document order. Rows without cells are dropped; the rest are
/// padded with empty strings from column 0 up to the last populated column.
pub fn parse_rows(xml: &str, shared_strings: &SharedStrings) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut in_sheet_data = false;
    let mut in_inline = false;
    let mut capture = Capture::None;
    let mut current_row: Option<BTreeMap<usize, String>> = None;
    let mut current_cell: Option<PendingCell> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                match (e.local_name().as_ref(), depth) {
                    (b"sheetData", 1) => in_sheet_data = true,
                    (b"row", 2) if in_sheet_data => current_row = Some(BTreeMap::new()),
                    (b"c", 3) if current_row.is_some() => {
                        current_cell = Some(PendingCell::from_element(e));
                    }
                    (b"v", 4) => {
                        if let Some(cell) = current_cell.as_mut() {
                            if cell.value.is_none() {
                                cell.value = Some(String::new());
                                capture = Capture::Value;
                            }
                        }
                    }
                    (b"is", 4) if current_cell.is_some() => in_inline = true,
                    (b"t", 5) if in_inline => {
                        if let Some(cell) = current_cell.as_mut() {
                            if cell.inline.is_none() {
                                cell.inline = Some(String::new());
                                capture = Capture::Inline;
                            }
                        }
                    }
                    _ => {}
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => match (e.local_name().as_ref(), depth) {
                // A self-closing row has no cells and is dropped
                (b"c", 3) if current_row.is_some() => {
                    let (column, text) = PendingCell::from_element(e).resolve(shared_strings)?;
                    if let Some(row) = current_row.as_mut() {
                        row.insert(column, text);
                    }
                }
                (b"v", 4) => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.value.get_or_insert_with(String::new);
                    }
                }
                (b"t", 5) if in_inline => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.inline.get_or_insert_with(String::new);
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if capture != Capture::None {
                    let text = e.unescape()?;
                    push_capture(current_cell.as_mut(), capture, &text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if capture != Capture::None {
                    let text = String::from_utf8_lossy(e);
                    push_capture(current_cell.as_mut(), capture, &text);
                }
            }
            Ok(Event::End(ref e)) => {
                depth = depth.saturating_sub(1);
                match (e.local_name().as_ref(), depth) {
                    (b"sheetData", 1) => in_sheet_data = false,
                    (b"row", 2) => {
                        if let Some(row) = current_row.take().and_then(densify) {
                            rows.push(row);
                        }
                    }
                    (b"c", 3) => {
                        if let Some(cell) = current_cell.take() {
                            let (column, text) = cell.resolve(shared_strings)?;
                            if let Some(row) = current_row.as_mut() {
                                row.insert(column, text);
                            }
                        }
                        in_inline = false;
                    }
                    (b"is", 4) => in_inline = false,
                    (b"v", 4) | (b"t", 5) => capture = Capture::None,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    debug!(rows = rows.len(), "decoded worksheet rows");
    Ok(rows)
}

fn push_capture(cell: Option<&mut PendingCell>, capture: Capture, text: &str) {
    let Some(cell) = cell else { return };
    let target = match capture {
        Capture::Value => cell.value.as_mut(),
        Capture::Inline => cell.inline.as_mut(),
        Capture::None => None,
    };
    if let Some(target) = target {
        target.push_str(text);
    }
}
