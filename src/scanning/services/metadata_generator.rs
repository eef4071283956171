use crate::scanning::domain::ScanMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for report metadata
///
/// Creates the timestamp and serial number stamped on CycloneDX output.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with current timestamp and unique serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ScanMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ScanMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates metadata naming this tool, using the compile-time version
    pub fn generate_default_metadata() -> ScanMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
