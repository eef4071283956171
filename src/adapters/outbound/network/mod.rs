/// Network adapters for the identification service
mod scanoss_client;

pub use scanoss_client::{ScanossApiClient, ScanossClientConfig, DEFAULT_API_URL};
