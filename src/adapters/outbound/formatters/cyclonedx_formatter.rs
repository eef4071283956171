use super::components_of;
use crate::application::dto::ScanResponse;
use crate::ports::outbound::ReportFormatter;
use crate::scanning::domain::{SbomComponent, ScanMetadata};
use crate::shared::Result;
use serde::Serialize;

/// Property name carrying the latest known version of a component
const LATEST_PROPERTY: &str = "wfp-scanner:latest";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<License>>,
    purl: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    name: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// Renders the deduplicated component set, one `library` component per purl.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CycloneDxFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        let components = components_of(response);
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.6".to_string(),
            version: 1,
            serial_number: response.metadata.serial_number().to_string(),
            metadata: self.build_metadata(&response.metadata),
            components: components.iter().map(|c| self.build_component(c)).collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata(&self, metadata: &ScanMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: vec![Tool {
                name: metadata.tool_name().to_string(),
                version: metadata.tool_version().to_string(),
            }],
        }
    }

    /// A component without a name falls back to its purl
    fn build_component(&self, component: &SbomComponent) -> Component {
        let properties = component
            .latest()
            .map(|latest| Property {
                name: LATEST_PROPERTY.to_string(),
                value: latest.to_string(),
            })
            .into_iter()
            .collect();

        Component {
            component_type: "library".to_string(),
            bom_ref: component.purl().to_string(),
            name: component
                .component()
                .unwrap_or(component.purl())
                .to_string(),
            version: component.version().map(String::from),
            publisher: component.vendor().map(String::from),
            licenses: component.license().map(|name| {
                vec![License {
                    license: LicenseContent {
                        name: name.to_string(),
                    },
                }]
            }),
            purl: component.purl().to_string(),
            properties,
        }
    }
}
