use indexmap::map::Entry;
use indexmap::IndexMap;

/// A component of the SBOM projection, keyed by its package URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomComponent {
    purl: String,
    vendor: Option<String>,
    component: Option<String>,
    version: Option<String>,
    latest: Option<String>,
    license: Option<String>,
}

impl SbomComponent {
    pub fn new(
        purl: String,
        vendor: Option<String>,
        component: Option<String>,
        version: Option<String>,
        latest: Option<String>,
        license: Option<String>,
    ) -> Self {
        Self {
            purl,
            vendor,
            component,
            version,
            latest,
            license,
        }
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }
}

/// Deduplicated component list; the first component stored for a purl wins
///
/// Iteration follows first-insertion order, so output is stable per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSet {
    components: IndexMap<String, SbomComponent>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the component unless its purl is already present
    ///
    /// Returns false (and drops `component`) for a duplicate purl.
    pub fn insert_if_absent(&mut self, component: SbomComponent) -> bool {
        match self.components.entry(component.purl.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(component);
                true
            }
        }
    }

    pub fn contains(&self, purl: &str) -> bool {
        self.components.contains_key(purl)
    }

    pub fn get(&self, purl: &str) -> Option<&SbomComponent> {
        self.components.get(purl)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SbomComponent> {
        self.components.values()
    }
}
