use crate::application::dto::ScanResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering scan results
///
/// This port abstracts the output format (raw JSON, CycloneDX, Markdown).
/// Formatting must be deterministic: the same response formats to the same
/// text every time.
pub trait ReportFormatter {
    /// Formats the finalized scan response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ScanResponse) -> Result<String>;
}
