use crate::scanning::domain::FingerprintRecord;
use std::io::{self, BufRead};

/// WfpParser - Splits a WFP text stream into per-file fingerprint records
///
/// A record opens at each `file=` header and is emitted as soon as the next
/// header (or end of stream) is seen, so the whole stream is never held in
/// memory. Continuation lines are not validated.
///
/// Lines before the first header (such as a `component=` line) are carried
/// into the first record's raw text so they are still submitted. A stream
/// without any header yields no records.
pub struct WfpParser<R> {
    reader: R,
    line: Vec<u8>,
    preamble: String,
    current: Option<(String, String)>,
    finished: bool,
}

impl<R: BufRead> WfpParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            preamble: String::new(),
            current: None,
            finished: false,
        }
    }

    /// Counts the file headers in a stream without building records
    pub fn count_records(mut reader: R) -> io::Result<usize> {
        let mut count = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(count);
            }
            if line.starts_with(crate::scanning::domain::WFP_FILE_START.as_bytes()) {
                count += 1;
            }
        }
    }

    fn finish_current(&mut self) -> Option<FingerprintRecord> {
        self.current
            .take()
            .map(|(path, text)| FingerprintRecord::new(path, text))
    }
}

impl<R: BufRead> Iterator for WfpParser<R> {
    type Item = io::Result<FingerprintRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                Ok(0) => {
                    self.finished = true;
                    return self.finish_current().map(Ok);
                }
                Ok(_) => {
                    // Fingerprint files are ASCII in practice; paths may not be
                    let line = String::from_utf8_lossy(&self.line).into_owned();

                    if FingerprintRecord::is_header(&line) {
                        let path = FingerprintRecord::display_path_from_header(&line).to_string();
                        let mut text = std::mem::take(&mut self.preamble);
                        text.push_str(&line);
                        let previous = self.finish_current();
                        self.current = Some((path, text));
                        if let Some(record) = previous {
                            return Some(Ok(record));
                        }
                    } else if let Some((_, text)) = self.current.as_mut() {
                        text.push_str(&line);
                    } else {
                        self.preamble.push_str(&line);
                    }
                }
            }
        }
    }
}
