/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod identification_client;
pub mod output_presenter;
pub mod progress_reporter;
pub mod wfp_reader;

pub use formatter::ReportFormatter;
pub use identification_client::{IdentificationClient, RawScanResults};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use wfp_reader::{WfpReader, WfpSource};
