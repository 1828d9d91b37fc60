//! Content document structures.

use serde::{Deserialize, Serialize};

/// The hero block at the top of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Display name
    pub name: String,
    /// One-line tagline
    pub tagline: String,
    /// Longer introduction
    pub description: String,
}

/// A labelled fact in the basic info list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub label: String,
    pub value: String,
}

/// A contact entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    /// Link target; the value itself when no link was given
    pub link: String,
}

/// The JSON document consumed by the site build.
///
/// Field order here is the key order of the written JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub hero: Hero,
    pub self_intro: Vec<String>,
    pub current_self: Vec<String>,
    pub direction: Vec<String>,
    pub stack: Vec<String>,
    pub basic_info: Vec<InfoItem>,
    pub recent_work: Vec<String>,
    pub studies: Vec<String>,
    pub favorites: Vec<String>,
    pub contact: Vec<ContactItem>,
    pub memo: Vec<String>,
}

impl ContentDocument {
    /// Create a document with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of list entries across all sections.
    pub fn entry_count(&self) -> usize {
        [
            &self.self_intro,
            &self.current_self,
            &self.direction,
            &self.stack,
            &self.recent_work,
            &self.studies,
            &self.favorites,
            &self.memo,
        ]
        .iter()
        .map(|list| list.len())
        .sum::<usize>()
            + self.basic_info.len()
            + self.contact.len()
    }

    /// Check if nothing has been filled in.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
