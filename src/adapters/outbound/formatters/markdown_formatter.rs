use super::components_of;
use crate::application::dto::ScanResponse;
use crate::ports::outbound::ReportFormatter;
use crate::scanning::domain::{ComponentSet, MatchEntry, ScanReport};
use crate::shared::Result;

/// Markdown table header for component information
const TABLE_HEADER: &str = "| Component | Vendor | Version | Latest | License | PURL |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|--------|---------|--------|---------|------|\n";

/// Markdown table header for the per-file summary
const FILE_TABLE_HEADER: &str = "| File | Match | Component | Version |\n";

/// Markdown table separator line for the per-file summary
const FILE_TABLE_SEPARATOR: &str = "|------|-------|-----------|---------|\n";

/// MarkdownFormatter adapter for a human-readable scan report
///
/// Renders the component inventory followed by one row per scanned file.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &ScanResponse) {
        output.push_str("# Fingerprint Scan Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}.\n\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp()
        ));
    }

    fn render_components(&self, output: &mut String, components: &ComponentSet) {
        output.push_str("## Component Inventory\n\n");
        if components.is_empty() {
            output.push_str("No components were identified.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for component in components.iter() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::cell(component.component()),
                Self::cell(component.vendor()),
                Self::cell(component.version()),
                Self::cell(component.latest()),
                Self::cell(component.license()),
                Self::escape_markdown_table_cell(component.purl())
            ));
        }
        output.push('\n');
    }

    /// One row per file; files with several matches list the first identified one
    fn render_files(&self, output: &mut String, report: &ScanReport) {
        output.push_str("## Scanned Files\n\n");
        output.push_str(&format!(
            "{} file(s), {} identified match(es).\n\n",
            report.len(),
            report.identified_match_count()
        ));
        if report.is_empty() {
            return;
        }

        output.push_str(FILE_TABLE_HEADER);
        output.push_str(FILE_TABLE_SEPARATOR);
        for (path, matches) in report.iter() {
            let identified = matches.iter().find(|m| m.is_match());
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(path),
                Self::cell(identified.and_then(MatchEntry::id).or(Some("none"))),
                Self::cell(identified.and_then(MatchEntry::component)),
                Self::cell(identified.and_then(MatchEntry::version))
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_components(&mut output, &components_of(response));
        self.render_files(&mut output, &response.report);

        Ok(output)
    }
}
