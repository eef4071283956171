use super::match_entry::{FileMatches, MatchEntry};
use indexmap::IndexMap;
use serde::Serialize;

/// Finalized, read-only aggregation of every batch's results
///
/// Keys are display paths in the order files were first dispatched.
/// Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    files: IndexMap<String, FileMatches>,
}

impl ScanReport {
    pub fn new(files: IndexMap<String, FileMatches>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&[MatchEntry]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchEntry])> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of match entries that identify a component
    pub fn identified_match_count(&self) -> usize {
        self.files
            .values()
            .flatten()
            .filter(|entry| entry.is_match())
            .count()
    }
}
