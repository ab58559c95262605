use serde::{Deserialize, Serialize};

/// A minimal view of one logged experience: the place it refers to and its 1–5 rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub entity_name: String,
    pub rating: f64,
}

/// Distinct entity names backing one summary, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct KnownEntitySet {
    names: Vec<String>,
    folded: Vec<String>,
}

impl KnownEntitySet {
    /// Blank names are skipped: an empty name is a substring of every phrase.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || set.names.iter().any(|n| n == name) {
                continue;
            }
            set.folded.push(name.to_lowercase());
            set.names.push(name.to_string());
        }
        set
    }

    pub fn from_records(records: &[ReferenceRecord]) -> Self {
        Self::from_names(records.iter().map(|r| r.entity_name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Case-insensitive containment in either direction against any known name.
    pub fn matches(&self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return false;
        }
        let phrase = phrase.to_lowercase();
        self.folded
            .iter()
            .any(|name| name.contains(&phrase) || phrase.contains(name.as_str()))
    }
}
