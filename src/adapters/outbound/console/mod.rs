/// Console adapters for diagnostic output
mod progress_reporter;

pub use progress_reporter::{StderrProgressReporter, Verbosity};
