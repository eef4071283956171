use crate::shared::Result;
use indexmap::IndexMap;
use serde_json::Value;

/// Undecoded service response: display path -> match list, in response order
pub type RawScanResults = IndexMap<String, Value>;

/// IdentificationClient port for the remote code identification service
///
/// Implementations own transport concerns (HTTP, authentication, timeouts,
/// retries). The scan pipeline calls `scan` at most once per batch.
pub trait IdentificationClient {
    /// Submits one batch of fingerprints
    ///
    /// # Arguments
    /// * `wfp` - Concatenated fingerprint blocks of the batch
    /// * `context` - Optional component name used to bias ambiguous matches
    ///
    /// # Returns
    /// `Some(results)` keyed by display path, or `None` when the service
    /// returned no data
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    fn scan(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>>;
}

impl<T: IdentificationClient + ?Sized> IdentificationClient for &T {
    fn scan(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>> {
        (**self).scan(wfp, context)
    }
}
