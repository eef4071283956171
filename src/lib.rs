//! wfp-scanner - batching client for a code identification service
//!
//! This library reads a stream of winnowing fingerprints (WFP), packs it
//! into size-bounded requests, sends them one at a time to an
//! identification service and merges the answers into a single report,
//! rendered as raw JSON or as a deduplicated component list (SBOM).
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scanning`): Fingerprint records, batches, matches and
//!   the pure services that parse, batch, track hints and aggregate
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use wfp_scanner::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = FileSystemReader::new();
//! let client = ScanossApiClient::new(ScanossClientConfig::default())?;
//! let progress_reporter = StderrProgressReporter::new(Verbosity::Normal);
//!
//! // Create use case
//! let use_case = ScanWfpUseCase::new(reader, client, progress_reporter);
//!
//! // Execute
//! let request = ScanRequest::with_defaults(WfpSource::from_arg(Path::new("scan.wfp")));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = RawJsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scanning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, Verbosity};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, MarkdownFormatter, RawJsonFormatter,
    };
    pub use crate::adapters::outbound::network::{ScanossApiClient, ScanossClientConfig};
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse, ScanSummary};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ScanWfpUseCase;
    pub use crate::ports::outbound::{
        IdentificationClient, OutputPresenter, ProgressReporter, RawScanResults,
        ReportFormatter, WfpReader, WfpSource,
    };
    pub use crate::scanning::domain::{
        Batch, ComponentSet, DominantHint, FingerprintRecord, MatchEntry, MatchesByPath,
        SbomComponent, ScanReport, ScanWarning, MAX_POST_SIZE,
    };
    pub use crate::scanning::services::{
        BatchAssembler, ComponentExtractor, HintTracker, ResultAggregator, WfpParser,
    };
    pub use crate::shared::Result;
}
