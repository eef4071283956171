/// Scanning domain - fingerprint batching and result aggregation
///
/// Pure business logic with no I/O: parsing the WFP stream into records,
/// packing records into size-bounded batches, tracking the dominant
/// component hint, and merging per-batch matches into one report.
pub mod domain;
pub mod services;
