use crate::adapters::outbound::formatters::{
    CycloneDxFormatter, MarkdownFormatter, RawJsonFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Encapsulates the choice of formatter adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use wfp_scanner::application::dto::OutputFormat;
    /// use wfp_scanner::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::CycloneDx);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Plain => Box::new(RawJsonFormatter::new()),
            OutputFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use wfp_scanner::application::dto::OutputFormat;
    /// use wfp_scanner::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Plain);
    /// assert_eq!(message, "📝 Generating raw JSON results...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Plain => "📝 Generating raw JSON results...",
            OutputFormat::CycloneDx => "📝 Generating CycloneDX JSON format output...",
            OutputFormat::Markdown => "📝 Generating Markdown format output...",
        }
    }
}
