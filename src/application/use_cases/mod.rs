/// Use cases module containing application business logic orchestration
mod scan_dispatcher;
mod scan_wfp;

pub use scan_dispatcher::{DispatchOutcome, ScanDispatcher};
pub use scan_wfp::ScanWfpUseCase;
