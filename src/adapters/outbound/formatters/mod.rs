/// Formatter adapters for the supported report formats
mod cyclonedx_formatter;
mod markdown_formatter;
mod raw_json_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use raw_json_formatter::RawJsonFormatter;

use crate::application::dto::ScanResponse;
use crate::scanning::domain::ComponentSet;
use crate::scanning::services::ComponentExtractor;
use std::borrow::Cow;

/// Component set of a response, projected on demand if the use case skipped it
fn components_of(response: &ScanResponse) -> Cow<'_, ComponentSet> {
    match &response.components {
        Some(components) => Cow::Borrowed(components),
        None => Cow::Owned(ComponentExtractor::extract(&response.report).components),
    }
}
