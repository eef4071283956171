pub mod batch;
pub mod dominant_hint;
pub mod fingerprint;
pub mod match_entry;
pub mod report;
pub mod sbom_component;
pub mod scan_metadata;
pub mod warning;

pub use batch::{Batch, MAX_POST_SIZE};
pub use dominant_hint::DominantHint;
pub use fingerprint::{FingerprintRecord, WFP_FILE_START};
pub use match_entry::{FileMatches, LicenseRef, MatchEntry, MatchesByPath, NO_MATCH_ID};
pub use report::ScanReport;
pub use sbom_component::{ComponentSet, SbomComponent};
pub use scan_metadata::ScanMetadata;
pub use warning::ScanWarning;
