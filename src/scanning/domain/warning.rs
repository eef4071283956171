use thiserror::Error;

/// Recoverable problems met while scanning
///
/// None of these abort a scan: the affected batch or entry is left out of
/// the report and the warning is shown on the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    #[error("No result for batch {batch} ({files} file(s)): {reason}. Its files are left out of the report")]
    BatchDispatchFailure {
        batch: usize,
        files: usize,
        reason: String,
    },

    #[error("Skipping malformed match for {path}: {details}")]
    MalformedMatchEntry { path: String, details: String },

    #[error("No PURL found for a match in {path}; component skipped")]
    MissingPurl { path: String },

    #[error("Component {purl} (from {path}) already stored; duplicate skipped")]
    DuplicateComponent { path: String, purl: String },

    #[error("Post size {size} of batch {batch} is greater than limit {limit} (single oversized file)")]
    OversizedBatch {
        batch: usize,
        size: usize,
        limit: usize,
    },

    #[error("No fingerprints found to scan; the report will be empty")]
    EmptyInput,
}
