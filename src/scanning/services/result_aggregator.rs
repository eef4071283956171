use crate::scanning::domain::{FileMatches, MatchesByPath, ScanReport};
use indexmap::IndexMap;

/// ResultAggregator - Merges per-batch results into one ordered report
///
/// Paths keep the position where they were first merged. A path merged
/// again replaces its matches in place. `finish` consumes the aggregator,
/// so the report cannot change once handed to a formatter.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    files: IndexMap<String, FileMatches>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one batch; returns how many paths were already present
    pub fn merge(&mut self, batch: MatchesByPath) -> usize {
        let mut replaced = 0;
        for (path, matches) in batch {
            if self.files.insert(path, matches).is_some() {
                replaced += 1;
            }
        }
        replaced
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn finish(self) -> ScanReport {
        ScanReport::new(self.files)
    }
}
