use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the scan finished (possibly with per-batch warnings)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid input, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal, user-facing errors.
///
/// These abort the operation that raised them. Per-batch and per-entry
/// data-quality problems are not errors; see `ScanWarning`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid scan input: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing WFP file, '-' for stdin, or non-empty fingerprint text")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Failed to read fingerprints: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    WfpReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },
}
