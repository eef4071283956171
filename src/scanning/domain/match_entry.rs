use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Match id the identification service uses for "no match"
pub const NO_MATCH_ID: &str = "none";

/// Ordered match list for one file
pub type FileMatches = Vec<MatchEntry>;

/// Per-batch results keyed by display path, in service response order
pub type MatchesByPath = IndexMap<String, FileMatches>;

/// A license reference attached to a match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicenseRef {
    #[serde(default)]
    name: Option<String>,
}

impl LicenseRef {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Fields this client interprets; everything else is only carried in `raw`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct KnownFields {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    component: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    latest: Option<String>,
    #[serde(rename = "purl", default)]
    purls: Option<Vec<String>>,
    #[serde(default)]
    licenses: Option<Vec<LicenseRef>>,
}

/// One match returned by the identification service
///
/// Every field is optional on the wire; absence is a normal state. The
/// object is kept exactly as received and serializes back unchanged, key
/// order included, so the raw report reproduces what the service sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchEntry {
    #[serde(skip)]
    fields: KnownFields,
    raw: Map<String, Value>,
}

impl MatchEntry {
    /// Decodes one element of a file's match list
    ///
    /// # Errors
    /// Returns a description of the problem if the value is not an object or
    /// one of the known fields has the wrong type.
    pub fn from_value(value: Value) -> std::result::Result<Self, String> {
        let raw = match value {
            Value::Object(raw) => raw,
            other => return Err(format!("expected a match object, found {}", other)),
        };
        let fields =
            serde_json::from_value(Value::Object(raw.clone())).map_err(|e| e.to_string())?;
        Ok(Self { fields, raw })
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.id.as_deref()
    }

    /// True for an entry carrying an id other than the "none" sentinel
    pub fn is_match(&self) -> bool {
        matches!(self.fields.id.as_deref(), Some(id) if id != NO_MATCH_ID)
    }

    pub fn vendor(&self) -> Option<&str> {
        self.fields.vendor.as_deref()
    }

    pub fn component(&self) -> Option<&str> {
        self.fields.component.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.version.as_deref()
    }

    pub fn latest(&self) -> Option<&str> {
        self.fields.latest.as_deref()
    }

    pub fn licenses(&self) -> Option<&[LicenseRef]> {
        self.fields.licenses.as_deref()
    }

    pub fn first_purl(&self) -> Option<&str> {
        self.fields
            .purls
            .as_ref()
            .and_then(|p| p.first())
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    pub fn first_license_name(&self) -> Option<&str> {
        self.fields
            .licenses
            .as_ref()
            .and_then(|l| l.first())
            .and_then(LicenseRef::name)
    }

    /// `vendor:component:version` key used for hint counting
    ///
    /// None for non-matches and for entries missing any of the three parts.
    pub fn component_key(&self) -> Option<String> {
        if !self.is_match() {
            return None;
        }
        match (self.vendor(), self.component(), self.version()) {
            (Some(vendor), Some(component), Some(version)) => {
                Some(format!("{}:{}:{}", vendor, component, version))
            }
            _ => None,
        }
    }
}
