use crate::scanning::domain::{
    ComponentSet, SbomComponent, ScanReport, ScanWarning, NO_MATCH_ID,
};

/// Result of projecting a report onto its component set
#[derive(Debug, Clone, Default)]
pub struct ComponentExtraction {
    pub components: ComponentSet,
    pub warnings: Vec<ScanWarning>,
}

/// ComponentExtractor - Builds the deduplicated SBOM view of a report
///
/// Walks files in report order. Each identified match contributes one
/// component keyed by its first purl; the first component seen for a purl
/// is kept. `"none"` entries are skipped silently; every other skipped
/// entry is reported as a warning, never as an error.
pub struct ComponentExtractor;

impl ComponentExtractor {
    pub fn extract(report: &ScanReport) -> ComponentExtraction {
        let mut extraction = ComponentExtraction::default();

        for (path, matches) in report.iter() {
            for entry in matches {
                match entry.id() {
                    None => {
                        extraction.warnings.push(ScanWarning::MalformedMatchEntry {
                            path: path.to_string(),
                            details: "match entry has no id".to_string(),
                        });
                        continue;
                    }
                    Some(NO_MATCH_ID) => continue,
                    Some(_) => {}
                }

                let Some(purl) = entry.first_purl() else {
                    extraction.warnings.push(ScanWarning::MissingPurl {
                        path: path.to_string(),
                    });
                    continue;
                };

                if extraction.components.contains(purl) {
                    extraction.warnings.push(ScanWarning::DuplicateComponent {
                        path: path.to_string(),
                        purl: purl.to_string(),
                    });
                    continue;
                }

                // A missing list is malformed; an empty one just has no license
                if entry.licenses().is_none() {
                    extraction.warnings.push(ScanWarning::MalformedMatchEntry {
                        path: path.to_string(),
                        details: format!("license list missing for {}", purl),
                    });
                    continue;
                }

                let component = SbomComponent::new(
                    purl.to_string(),
                    entry.vendor().map(String::from),
                    entry.component().map(String::from),
                    entry.version().map(String::from),
                    entry.latest().map(String::from),
                    entry.first_license_name().map(String::from),
                );
                extraction.components.insert_if_absent(component);
            }
        }

        extraction
    }
}
