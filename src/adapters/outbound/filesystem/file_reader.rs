use crate::ports::outbound::{WfpReader, WfpSource};
use crate::scanning::services::WfpParser;
use crate::shared::error::ScanError;
use crate::shared::security::{
    validate_file_size, validate_regular_file, MAX_ASSETS_FILE_SIZE, MAX_WFP_FILE_SIZE,
};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

/// FileSystemReader adapter for reading fingerprint streams
///
/// Implements the WfpReader port for WFP files, stdin and inline text.
/// Files are checked before opening:
/// - Reject symbolic links
/// - Validate file is a regular file
/// - Check file size limits
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads an SBOM assets file to attach to identification requests
    pub fn read_assets(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "SBOM assets file")?;
        validate_file_size(file_size, path, MAX_ASSETS_FILE_SIZE)?;
        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read SBOM assets file {}: {}", path.display(), e))
    }

    fn open_file(&self, path: &Path) -> Result<BufReader<File>> {
        let checked = validate_regular_file(path, "WFP file")
            .and_then(|size| validate_file_size(size, path, MAX_WFP_FILE_SIZE));
        if let Err(e) = checked {
            return Err(ScanError::InvalidInput {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }

        let file = File::open(path).map_err(|e| ScanError::WfpReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(BufReader::new(file))
    }

    fn check_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ScanError::InvalidInput {
                path: WfpSource::Text(String::new()).label(),
                reason: "fingerprint text is empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl WfpReader for FileSystemReader {
    fn open<'a>(&'a self, source: &'a WfpSource) -> Result<Box<dyn BufRead + 'a>> {
        match source {
            WfpSource::File(path) => Ok(Box::new(self.open_file(path)?)),
            WfpSource::Stdin => Ok(Box::new(io::stdin().lock())),
            WfpSource::Text(text) => {
                Self::check_text(text)?;
                Ok(Box::new(Cursor::new(text.as_bytes())))
            }
        }
    }

    /// Stdin cannot be read twice, so its count is unknown
    fn count_files(&self, source: &WfpSource) -> Result<Option<usize>> {
        let count = match source {
            WfpSource::File(path) => WfpParser::count_records(self.open_file(path)?),
            WfpSource::Stdin => return Ok(None),
            WfpSource::Text(text) => {
                Self::check_text(text)?;
                WfpParser::count_records(Cursor::new(text.as_bytes()))
            }
        };
        count.map(Some).map_err(|e| {
            ScanError::WfpReadError {
                path: source.label(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
