//! Mapping worksheet records into the content document.
//!
//! The first row is the header. Every later row becomes a [`Record`], and
//! each record is routed by its `Section` column into one bucket of the
//! [`ContentDocument`].

use crate::error::{Error, Result};
use crate::model::{ContactItem, ContentDocument, InfoItem, Record, Row};
use tracing::{debug, info};

/// Header label selecting the bucket.
pub const SECTION_LABEL: &str = "Section";
/// Header label for the entry key.
pub const KEY_LABEL: &str = "Key";
/// Header label for the entry value.
pub const VALUE_LABEL: &str = "Value";
/// Header label for a contact link.
pub const LINK_LABEL: &str = "Link";

/// Content buckets a record can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    SelfIntro,
    CurrentSelf,
    Direction,
    Stack,
    BasicInfo,
    RecentWork,
    Studies,
    Favorites,
    Contact,
    Memo,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::SelfIntro,
        Section::CurrentSelf,
        Section::Direction,
        Section::Stack,
        Section::BasicInfo,
        Section::RecentWork,
        Section::Studies,
        Section::Favorites,
        Section::Contact,
        Section::Memo,
    ];

    /// The name written in the `Section` column.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "HERO",
            Section::SelfIntro => "SELF_INTRO",
            Section::CurrentSelf => "CURRENT_SELF",
            Section::Direction => "DIRECTION",
            Section::Stack => "STACK",
            Section::BasicInfo => "BASIC_INFO",
            Section::RecentWork => "RECENT_WORK",
            Section::Studies => "STUDIES",
            Section::Favorites => "FAVORITES",
            Section::Contact => "CONTACT",
            Section::Memo => "MEMO",
        }
    }

    /// Look up a section by its exact uppercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pair every data row with the header, skipping blank records.
///
/// Returns no records when `rows` is empty.
pub fn build_records(rows: &[Row]) -> Vec<Record> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    data.iter()
        .map(|row| Record::from_row(header, row))
        .filter(|record| {
            let keep = !record.is_blank();
            if !keep {
                debug!("skipping blank record");
            }
            keep
        })
        .collect()
}

/// Route records into a fresh content document, in order.
pub fn map_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> ContentDocument {
    let mut doc = ContentDocument::new();
    for record in records {
        apply_record(&mut doc, record);
    }
    doc
}

/// Apply a single record to the document.
pub fn apply_record(doc: &mut ContentDocument, record: &Record) {
    let section_name = record.field(SECTION_LABEL).to_uppercase();
    if section_name.is_empty() {
        return;
    }
    let Some(section) = Section::from_name(&section_name) else {
        debug!(section = %section_name, "ignoring unknown section");
        return;
    };

    let key = record.field(KEY_LABEL);
    let value = record.field(VALUE_LABEL);
    let link = record.field(LINK_LABEL);

    if section == Section::Hero {
        match key.to_lowercase().as_str() {
            "name" => doc.hero.name = value.to_string(),
            "tagline" => doc.hero.tagline = value.to_string(),
            "description" => doc.hero.description = value.to_string(),
            other => debug!(key = other, "ignoring unknown hero key"),
        }
        return;
    }

    if value.is_empty() {
        return;
    }

    let list = match section {
        Section::SelfIntro => &mut doc.self_intro,
        Section::CurrentSelf => &mut doc.current_self,
        Section::Direction => &mut doc.direction,
        Section::Stack => &mut doc.stack,
        Section::RecentWork => &mut doc.recent_work,
        Section::Studies => &mut doc.studies,
        Section::Favorites => &mut doc.favorites,
        Section::Memo => &mut doc.memo,
        Section::BasicInfo => {
            doc.basic_info.push(InfoItem {
                label: key.to_string(),
                value: value.to_string(),
            });
            return;
        }
        Section::Contact => {
            doc.contact.push(ContactItem {
                label: non_empty_or(key, value),
                value: value.to_string(),
                link: non_empty_or(link, value),
            });
            return;
        }
        Section::Hero => return,
    };
    list.push(value.to_string());
}

fn non_empty_or(text: &str, fallback: &str) -> String {
    let chosen = if text.is_empty() { fallback } else { text };
    chosen.to_string()
}

/// Convert decoded worksheet rows into the content document.
///
/// A sheet with no rows, or only a header row, is an error.
pub fn convert_rows(rows: &[Row]) -> Result<ContentDocument> {
    if rows.len() < 2 {
        return Err(Error::EmptySheet);
    }

    let records = build_records(rows);
    let doc = map_records(&records);
    info!(
        rows = rows.len(),
        records = records.len(),
        entries = doc.entry_count(),
        "mapped worksheet records"
    );
    Ok(doc)
}
