use crate::application::dto::ScanResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// RawJsonFormatter adapter for the plain per-file match document
///
/// Serializes the finalized report once, as a pretty-printed JSON object
/// keyed by display path in dispatch order. Each match object is written
/// back as the service returned it, unknown fields and key order included.
pub struct RawJsonFormatter;

impl RawJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RawJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for RawJsonFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        serde_json::to_string_pretty(&response.report).map_err(Into::into)
    }
}
