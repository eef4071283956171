use crate::ports::outbound::{IdentificationClient, RawScanResults};
use crate::scanning::domain::{Batch, DominantHint, MatchEntry, MatchesByPath, ScanWarning};
use serde_json::Value;

/// What came back for one dispatched batch
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The service answered; malformed parts were dropped with warnings
    Matched {
        matches: MatchesByPath,
        warnings: Vec<ScanWarning>,
    },
    /// The service failed or returned nothing for this batch
    NoResult { reason: String },
}

/// ScanDispatcher - Sends one batch to the identification service
///
/// Exactly one attempt per batch: a failure becomes `NoResult` and the
/// caller moves on to the next batch. Retrying is the client's business.
pub struct ScanDispatcher<C> {
    client: C,
}

impl<C: IdentificationClient> ScanDispatcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn dispatch(&self, batch: &Batch, hint: &DominantHint) -> DispatchOutcome {
        match self.client.scan(&batch.payload(), hint.as_context()) {
            Ok(Some(results)) => Self::decode(results),
            Ok(None) => DispatchOutcome::NoResult {
                reason: "the identification service returned no data".to_string(),
            },
            Err(e) => DispatchOutcome::NoResult {
                reason: format!("{:#}", e),
            },
        }
    }

    /// Turns the raw response into typed matches, skipping malformed parts
    fn decode(results: RawScanResults) -> DispatchOutcome {
        let mut matches = MatchesByPath::with_capacity(results.len());
        let mut warnings = Vec::new();

        for (path, value) in results {
            let Value::Array(items) = value else {
                warnings.push(ScanWarning::MalformedMatchEntry {
                    details: format!("expected a list of matches, found {}", value),
                    path,
                });
                continue;
            };

            let mut entries = Vec::with_capacity(items.len());
            for item in items {
                match MatchEntry::from_value(item) {
                    Ok(entry) => entries.push(entry),
                    Err(details) => warnings.push(ScanWarning::MalformedMatchEntry {
                        path: path.clone(),
                        details,
                    }),
                }
            }
            matches.insert(path, entries);
        }

        DispatchOutcome::Matched { matches, warnings }
    }
}
