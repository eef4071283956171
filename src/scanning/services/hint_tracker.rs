use crate::scanning::domain::{DominantHint, MatchesByPath};
use std::collections::HashMap;

/// HintTracker - Keeps the session's dominant component hint
///
/// Counts matches per exact `vendor:component:version` across the whole
/// session. The hint moves to a component only when its count strictly
/// exceeds the current hit count, so ties keep the earlier leader.
#[derive(Debug, Default)]
pub struct HintTracker {
    counts: HashMap<String, u32>,
    hint: DominantHint,
}

impl HintTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint to send with the next dispatch
    pub fn current(&self) -> &DominantHint {
        &self.hint
    }

    /// Folds one batch's results into the session counts
    ///
    /// Non-matches and entries missing vendor, component or version are ignored.
    pub fn update(&mut self, matches: &MatchesByPath) {
        for entry in matches.values().flatten() {
            let (Some(key), Some(component)) = (entry.component_key(), entry.component()) else {
                continue;
            };
            let count = self.counts.entry(key).or_insert(0);
            *count += 1;
            if *count > self.hint.hit_count() {
                self.hint = DominantHint::new(component.to_string(), *count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanning::domain::MatchEntry;
    use serde_json::json;

    fn entry(id: &str, component: &str, version: &str) -> MatchEntry {
        MatchEntry::from_value(json!({
            "id": id,
            "vendor": "acme",
            "component": component,
            "version": version
        }))
        .unwrap()
    }

    fn batch(files: Vec<(&str, Vec<MatchEntry>)>) -> MatchesByPath {
        files
            .into_iter()
            .map(|(path, entries)| (path.to_string(), entries))
            .collect()
    }

    #[test]
    fn test_starts_empty() {
        let tracker = HintTracker::new();
        assert_eq!(tracker.current(), &DominantHint::default());
    }

    #[test]
    fn test_most_frequent_component_wins() {
        let mut tracker = HintTracker::new();
        tracker.update(&batch(vec![
            ("a.c", vec![entry("file", "zlib", "1.2")]),
            ("b.c", vec![entry("file", "curl", "8.0")]),
            ("c.c", vec![entry("snippet", "curl", "8.0")]),
        ]));
        assert_eq!(tracker.current().name(), "curl");
        assert_eq!(tracker.current().hit_count(), 2);
    }

    #[test]
    fn test_tie_keeps_first_leader() {
        let mut tracker = HintTracker::new();
        tracker.update(&batch(vec![
            ("a.c", vec![entry("file", "zlib", "1.2")]),
            ("b.c", vec![entry("file", "curl", "8.0")]),
        ]));
        assert_eq!(tracker.current().name(), "zlib");
        assert_eq!(tracker.current().hit_count(), 1);
    }

    #[test]
    fn test_versions_are_counted_separately() {
        let mut tracker = HintTracker::new();
        tracker.update(&batch(vec![
            ("a.c", vec![entry("file", "zlib", "1.2")]),
            ("b.c", vec![entry("file", "zlib", "1.3")]),
        ]));
        assert_eq!(tracker.current().hit_count(), 1);
    }

    #[test]
    fn test_none_and_incomplete_entries_are_ignored() {
        let mut tracker = HintTracker::new();
        let incomplete = MatchEntry::from_value(json!({"id": "file", "component": "x"})).unwrap();
        tracker.update(&batch(vec![
            ("a.c", vec![entry("none", "zlib", "1.2")]),
            ("b.c", vec![incomplete]),
        ]));
        assert_eq!(tracker.current(), &DominantHint::default());
    }

    #[test]
    fn test_counts_accumulate_across_batches_and_never_decrease() {
        let mut tracker = HintTracker::new();
        let mut previous = 0;

        let batches = vec![
            batch(vec![("a.c", vec![entry("file", "zlib", "1.2")])]),
            batch(vec![
                ("b.c", vec![entry("file", "curl", "8.0")]),
                ("c.c", vec![entry("file", "curl", "8.0")]),
            ]),
            batch(vec![("d.c", vec![])]),
            batch(vec![
                ("e.c", vec![entry("file", "zlib", "1.2")]),
                ("f.c", vec![entry("file", "zlib", "1.2")]),
            ]),
        ];

        for result in &batches {
            tracker.update(result);
            assert!(tracker.current().hit_count() >= previous);
            previous = tracker.current().hit_count();
        }

        assert_eq!(tracker.current().name(), "zlib");
        assert_eq!(tracker.current().hit_count(), 3);
    }
}
