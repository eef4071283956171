use super::OutputFormat;
use crate::ports::outbound::WfpSource;
use crate::scanning::domain::MAX_POST_SIZE;

/// ScanRequest - Internal request DTO for the scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Fingerprint stream to scan
    pub source: WfpSource,
    /// Output format; decides whether the component projection is built
    pub format: OutputFormat,
    /// Payload ceiling per request, in bytes
    pub post_size_limit: usize,
}

impl ScanRequest {
    pub fn new(source: WfpSource, format: OutputFormat, post_size_limit: usize) -> Self {
        Self {
            source,
            format,
            post_size_limit,
        }
    }

    /// Request with plain output and the default 64 KiB limit
    pub fn with_defaults(source: WfpSource) -> Self {
        Self::new(source, OutputFormat::Plain, MAX_POST_SIZE)
    }
}
