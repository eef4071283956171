use crate::scanning::domain::{ComponentSet, DominantHint, ScanMetadata, ScanReport, ScanWarning};

/// Counters describing one scan session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files read from the fingerprint stream and submitted
    pub files_submitted: usize,
    /// Batches sent to the identification service
    pub batches_dispatched: usize,
    /// Batches for which the service returned no usable result
    pub batches_failed: usize,
    /// Dominant component hint at the end of the session
    pub dominant_hint: DominantHint,
}

/// ScanResponse - Internal response DTO from the scan use case
///
/// Holds the finalized report plus everything the formatters need.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Aggregated per-file matches in dispatch order
    pub report: ScanReport,
    /// Deduplicated components (only present for SBOM-style formats)
    pub components: Option<ComponentSet>,
    /// Report metadata (timestamp, tool info, serial number)
    pub metadata: ScanMetadata,
    pub summary: ScanSummary,
    /// Every warning raised during the scan, in order
    pub warnings: Vec<ScanWarning>,
}

impl ScanResponse {
    pub fn new(
        report: ScanReport,
        components: Option<ComponentSet>,
        metadata: ScanMetadata,
        summary: ScanSummary,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            report,
            components,
            metadata,
            summary,
            warnings,
        }
    }
}
