use crate::shared::Result;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Where a fingerprint stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WfpSource {
    /// A WFP file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// Fingerprint text supplied directly
    Text(String),
}

impl WfpSource {
    /// Interprets a CLI path argument, where `-` means standard input
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            WfpSource::Stdin
        } else {
            WfpSource::File(arg.to_path_buf())
        }
    }

    /// Label used in messages and errors
    pub fn label(&self) -> PathBuf {
        match self {
            WfpSource::File(path) => path.clone(),
            WfpSource::Stdin => PathBuf::from("<stdin>"),
            WfpSource::Text(_) => PathBuf::from("<fingerprint text>"),
        }
    }
}

/// WfpReader port for opening fingerprint streams
pub trait WfpReader {
    /// Opens the source for streaming
    ///
    /// # Errors
    /// Returns `ScanError::InvalidInput` if the source does not exist, is not
    /// a regular file, or is empty text
    fn open<'a>(&'a self, source: &'a WfpSource) -> Result<Box<dyn BufRead + 'a>>;

    /// Counts the files in the source ahead of scanning, if the source can be
    /// read twice
    fn count_files(&self, source: &WfpSource) -> Result<Option<usize>>;
}
