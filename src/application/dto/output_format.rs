/// Output format enumeration for scan reports
///
/// Both the CLI (inbound adapter) and formatters (outbound adapters) need
/// to understand it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw per-file match document (default)
    #[default]
    Plain,
    /// CycloneDX JSON built from the deduplicated component set
    CycloneDx,
    /// Human-readable Markdown component table
    Markdown,
}

impl OutputFormat {
    /// Whether the format renders the SBOM component projection
    pub fn needs_components(&self) -> bool {
        matches!(self, OutputFormat::CycloneDx | OutputFormat::Markdown)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "raw" | "json" => Ok(OutputFormat::Plain),
            "cyclonedx" | "cdx" | "sbom" => Ok(OutputFormat::CycloneDx),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'plain', 'cyclonedx' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::CycloneDx => write!(f, "cyclonedx"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
