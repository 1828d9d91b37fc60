//! Row and record structures.

/// A dense worksheet row.
///
/// Unpopulated columns below the last populated one hold empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    /// Create a row from its cell values.
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Cell values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Cell value at a column, if the row reaches it.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Number of columns up to the last populated one.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A data row keyed by header label.
///
/// Entries keep header order. A label that appears twice in the header keeps
/// its first position and the value of its last column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Pair a data row with the header.
    ///
    /// Header positions past the end of the row map to `""`; row cells past
    /// the end of the header are dropped.
    pub fn from_row(header: &Row, row: &Row) -> Self {
        let mut record = Self::default();
        for (column, label) in header.values().iter().enumerate() {
            record.insert(label.clone(), row.get(column).unwrap_or_default().to_string());
        }
        record
    }

    /// Set a field, replacing any existing value for the label.
    pub fn insert(&mut self, label: String, value: String) {
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(field) => field.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    /// Value for a label, if the header has it.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value for a label, or `""` when the header lacks it.
    pub fn field(&self, label: &str) -> &str {
        self.get(label).unwrap_or_default().trim()
    }

    /// True when every value is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.trim().is_empty())
    }
}
