use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use wfp_scanner::prelude::*;

/// One request seen by the mock service
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedScan {
    pub payload: String,
    pub context: Option<String>,
    pub paths: Vec<String>,
}

/// Mock IdentificationClient answering from a fixed match table
///
/// Every file in a request gets the matches registered for its path, or an
/// empty list. Calls listed in `failing_calls` (1-based) return an error.
#[derive(Default, Clone)]
pub struct MockIdentificationClient {
    matches: HashMap<String, Vec<Value>>,
    failing_calls: HashSet<usize>,
    pub calls: Arc<Mutex<Vec<RecordedScan>>>,
}

impl MockIdentificationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match(mut self, path: &str, entry: Value) -> Self {
        self.matches.entry(path.to_string()).or_default().push(entry);
        self
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.failing_calls.insert(call);
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedScan> {
        self.calls.lock().unwrap().clone()
    }
}

impl IdentificationClient for MockIdentificationClient {
    fn scan(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>> {
        let paths: Vec<String> = WfpParser::new(Cursor::new(wfp.as_bytes()))
            .map(|record| record.map(|r| r.display_path().to_string()))
            .collect::<std::io::Result<_>>()?;

        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedScan {
                payload: wfp.to_string(),
                context: context.map(String::from),
                paths: paths.clone(),
            });
            calls.len()
        };

        if self.failing_calls.contains(&call_number) {
            anyhow::bail!("simulated outage on call {}", call_number);
        }

        let results = paths
            .into_iter()
            .map(|path| {
                let entries = self.matches.get(&path).cloned().unwrap_or_default();
                (path, Value::Array(entries))
            })
            .collect();
        Ok(Some(results))
    }
}
