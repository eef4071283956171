use super::fingerprint::FingerprintRecord;

/// Maximum payload size accepted by the identification service (64 KiB)
pub const MAX_POST_SIZE: usize = 64 * 1024;

/// An ordered group of fingerprint records submitted in one request
///
/// `cumulative_bytes` is the sum of the records' byte sizes, which is also
/// the size of the concatenated payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    sequence: usize,
    records: Vec<FingerprintRecord>,
    cumulative_bytes: usize,
}

impl Batch {
    /// Creates an empty batch; `sequence` is its 1-based position in the session
    pub fn new(sequence: usize) -> Self {
        Self {
            sequence,
            records: Vec::new(),
            cumulative_bytes: 0,
        }
    }

    pub fn push(&mut self, record: FingerprintRecord) {
        self.cumulative_bytes += record.byte_size();
        self.records.push(record);
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn records(&self) -> &[FingerprintRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }

    pub fn cumulative_bytes(&self) -> usize {
        self.cumulative_bytes
    }

    /// Returns true if adding `record_size` bytes must close this batch first
    ///
    /// An empty batch always accepts the next record, however large.
    pub fn would_reach_limit(&self, record_size: usize, limit: usize) -> bool {
        !self.is_empty() && self.cumulative_bytes + record_size >= limit
    }

    /// A single record larger than the limit produces an oversized batch
    pub fn is_oversized(&self, limit: usize) -> bool {
        self.cumulative_bytes > limit
    }

    pub fn display_paths(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.display_path())
    }

    /// Concatenation of every record's fingerprint block
    pub fn payload(&self) -> String {
        let mut payload = String::with_capacity(self.cumulative_bytes);
        for record in &self.records {
            payload.push_str(record.raw_text());
        }
        payload
    }
}
