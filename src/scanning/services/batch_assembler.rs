use crate::scanning::domain::{Batch, FingerprintRecord};
use std::io;

/// BatchAssembler - Packs fingerprint records into size-bounded batches
///
/// A batch is closed just before the record that would take it to or past
/// the limit, so every batch stays under the limit unless it holds a single
/// record that is larger on its own. Records are never split.
///
/// Lazy: a batch is produced only when the next record (or end of input)
/// proves it complete. A read error is passed through and ends the sequence.
pub struct BatchAssembler<I> {
    records: I,
    limit: usize,
    current: Batch,
    finished: bool,
}

impl<I> BatchAssembler<I>
where
    I: Iterator<Item = io::Result<FingerprintRecord>>,
{
    /// Creates an assembler with an explicit payload limit in bytes
    pub fn new(records: I, limit: usize) -> Self {
        Self {
            records,
            limit,
            current: Batch::new(1),
            finished: false,
        }
    }

    fn take_current(&mut self) -> Batch {
        let next = Batch::new(self.current.sequence() + 1);
        std::mem::replace(&mut self.current, next)
    }
}

impl<I> Iterator for BatchAssembler<I>
where
    I: Iterator<Item = io::Result<FingerprintRecord>>,
{
    type Item = io::Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.records.next() {
                Some(Ok(record)) => {
                    if self
                        .current
                        .would_reach_limit(record.byte_size(), self.limit)
                    {
                        let full = self.take_current();
                        self.current.push(record);
                        return Some(Ok(full));
                    }
                    self.current.push(record);
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.take_current()));
                }
            }
        }
    }
}
