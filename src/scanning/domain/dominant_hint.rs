/// The most frequently matched component seen so far in a scan session
///
/// Passed to the identification service as context for ambiguous matches.
/// `hit_count` never decreases during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominantHint {
    name: String,
    hit_count: u32,
}

impl DominantHint {
    pub fn new(name: String, hit_count: u32) -> Self {
        Self { name, hit_count }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Context value to send with the next request, if any
    pub fn as_context(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}
