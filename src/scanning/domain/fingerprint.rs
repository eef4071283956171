/// Marker that opens a per-file block in a WFP stream
pub const WFP_FILE_START: &str = "file=";

/// One file's fingerprint block, exactly as it appeared in the stream
///
/// `raw_text` holds the header line and every continuation line up to the
/// next header, line terminators included. Records are atomic: they are
/// never split across batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintRecord {
    display_path: String,
    raw_text: String,
}

impl FingerprintRecord {
    pub fn new(display_path: String, raw_text: String) -> Self {
        Self {
            display_path,
            raw_text,
        }
    }

    /// Path the identification service will key its results by
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// UTF-8 encoded size of the block as it will be posted
    pub fn byte_size(&self) -> usize {
        self.raw_text.len()
    }

    /// Returns true if the line opens a new file block
    pub fn is_header(line: &str) -> bool {
        line.starts_with(WFP_FILE_START)
    }

    /// Extracts the display path from a `file=<md5>,<size>,<path>` header
    ///
    /// Everything after the second comma is the path, so paths containing
    /// commas survive. A header without the md5/size fields yields its
    /// whole remainder.
    pub fn display_path_from_header(line: &str) -> &str {
        let rest = line
            .strip_prefix(WFP_FILE_START)
            .unwrap_or(line)
            .trim_end_matches(['\r', '\n']);
        rest.splitn(3, ',').nth(2).unwrap_or(rest)
    }
}
