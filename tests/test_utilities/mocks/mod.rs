/// Mock implementations for testing
mod mock_identification_client;
mod mock_progress_reporter;

pub use mock_identification_client::{MockIdentificationClient, RecordedScan};
pub use mock_progress_reporter::MockProgressReporter;
