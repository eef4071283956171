use super::*;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{RawScanResults, WfpSource};
use crate::scanning::domain::DominantHint;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::rc::Rc;

// Mock implementations for testing
struct MockWfpReader {
    content: String,
}

impl WfpReader for MockWfpReader {
    fn open<'a>(&'a self, _source: &'a WfpSource) -> Result<Box<dyn BufRead + 'a>> {
        Ok(Box::new(Cursor::new(self.content.as_bytes())))
    }

    fn count_files(&self, _source: &WfpSource) -> Result<Option<usize>> {
        Ok(Some(WfpParser::count_records(Cursor::new(
            self.content.as_bytes(),
        ))?))
    }
}

/// Reader that yields one record and then fails
struct BrokenWfpReader;

struct FailAfterFirstRead {
    served: bool,
}

impl Read for FailAfterFirstRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::other("device went away"));
        }
        self.served = true;
        let data = b"file=h,1,a.c\n4=aa\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

impl WfpReader for BrokenWfpReader {
    fn open<'a>(&'a self, _source: &'a WfpSource) -> Result<Box<dyn BufRead + 'a>> {
        Ok(Box::new(BufReader::new(FailAfterFirstRead { served: false })))
    }

    fn count_files(&self, _source: &WfpSource) -> Result<Option<usize>> {
        Ok(None)
    }
}

type RecordedCall = (String, Option<String>);

/// Client returning scripted responses in call order, then `Ok(None)`
#[derive(Default)]
struct MockIdentificationClient {
    responses: RefCell<VecDeque<Result<Option<RawScanResults>>>>,
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl MockIdentificationClient {
    fn with_responses(responses: Vec<Result<Option<RawScanResults>>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: Rc::default(),
        }
    }
}

impl IdentificationClient for MockIdentificationClient {
    fn scan(&self, wfp: &str, context: Option<&str>) -> Result<Option<RawScanResults>> {
        self.calls
            .borrow_mut()
            .push((wfp.to_string(), context.map(String::from)));
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    errors: Rc<RefCell<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_debug(&self, _message: &str) {}
    fn report_trace(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn wfp(paths: &[&str]) -> String {
    paths
        .iter()
        .map(|p| format!("file=d41d8cd9,10,{}\n4=579be9fb\n", p))
        .collect()
}

fn results(value: Value) -> Result<Option<RawScanResults>> {
    Ok(Some(serde_json::from_value(value).unwrap()))
}

fn zlib_match() -> Value {
    json!({
        "id": "file",
        "vendor": "madler",
        "component": "zlib",
        "version": "1.2.11",
        "purl": ["pkg:github/madler/zlib"],
        "licenses": [{"name": "Zlib"}]
    })
}

fn request(format: OutputFormat, limit: usize) -> ScanRequest {
    ScanRequest::new(WfpSource::Stdin, format, limit)
}

#[test]
fn test_single_batch_is_merged_into_report() {
    let client = MockIdentificationClient::with_responses(vec![results(json!({
        "a.c": [zlib_match()],
        "b.c": [{"id": "none"}]
    }))]);
    let calls = client.calls.clone();
    let use_case = ScanWfpUseCase::new(
        MockWfpReader {
            content: wfp(&["a.c", "b.c"]),
        },
        client,
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(ScanRequest::with_defaults(WfpSource::Stdin))
        .unwrap();

    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(response.report.paths().collect::<Vec<_>>(), vec!["a.c", "b.c"]);
    assert_eq!(response.report.identified_match_count(), 1);
    assert!(response.components.is_none());
    assert!(response.warnings.is_empty());
    assert_eq!(response.summary.files_submitted, 2);
    assert_eq!(response.summary.batches_dispatched, 1);
    assert_eq!(
        response.summary.dominant_hint,
        DominantHint::new("zlib".to_string(), 1)
    );
}

#[test]
fn test_failed_batch_is_skipped_and_scan_continues() {
    let content = wfp(&["a.c", "b.c", "c.c"]);
    let one_record = content.len() / 3;
    let client = MockIdentificationClient::with_responses(vec![
        results(json!({"a.c": [zlib_match()]})),
        Err(anyhow::anyhow!("HTTP 503")),
        results(json!({"c.c": [{"id": "none"}]})),
    ]);
    let calls = client.calls.clone();
    let reporter = MockProgressReporter::default();
    let errors = reporter.errors.clone();
    let use_case = ScanWfpUseCase::new(MockWfpReader { content }, client, reporter);

    let response = use_case
        .execute(request(OutputFormat::Plain, one_record + 1))
        .unwrap();

    assert_eq!(calls.borrow().len(), 3);
    assert_eq!(response.report.paths().collect::<Vec<_>>(), vec!["a.c", "c.c"]);
    assert!(response.report.get("b.c").is_none());
    assert_eq!(response.summary.batches_failed, 1);
    assert_eq!(
        response.warnings,
        vec![ScanWarning::BatchDispatchFailure {
            batch: 2,
            files: 1,
            reason: "HTTP 503".to_string(),
        }]
    );
    assert!(errors.borrow().iter().any(|e| e.contains("batch 2")));
}

#[test]
fn test_hint_from_earlier_batches_is_sent_with_later_ones() {
    let content = wfp(&["a.c", "b.c", "c.c"]);
    let one_record = content.len() / 3;
    let client = MockIdentificationClient::with_responses(vec![
        results(json!({"a.c": [zlib_match()]})),
        results(json!({"b.c": [zlib_match()]})),
        results(json!({"c.c": []})),
    ]);
    let calls = client.calls.clone();
    let use_case = ScanWfpUseCase::new(
        MockWfpReader { content },
        client,
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request(OutputFormat::Plain, one_record + 1))
        .unwrap();

    let contexts: Vec<_> = calls.borrow().iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(
        contexts,
        vec![None, Some("zlib".to_string()), Some("zlib".to_string())]
    );
    assert_eq!(response.summary.dominant_hint.hit_count(), 2);
}

#[test]
fn test_batches_carry_whole_records_in_order() {
    let content = wfp(&["a.c", "b.c", "c.c"]);
    let one_record = content.len() / 3;
    let client = MockIdentificationClient::default();
    let calls = client.calls.clone();
    let use_case = ScanWfpUseCase::new(
        MockWfpReader {
            content: content.clone(),
        },
        client,
        MockProgressReporter::default(),
    );

    use_case
        .execute(request(OutputFormat::Plain, 2 * one_record + 1))
        .unwrap();

    let payloads: Vec<_> = calls.borrow().iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads.concat(), content);
    assert!(payloads[1].starts_with("file=d41d8cd9,10,c.c\n"));
}

#[test]
fn test_empty_input_makes_no_requests() {
    let client = MockIdentificationClient::default();
    let calls = client.calls.clone();
    let use_case = ScanWfpUseCase::new(
        MockWfpReader {
            content: String::new(),
        },
        client,
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(ScanRequest::with_defaults(WfpSource::Stdin))
        .unwrap();

    assert!(calls.borrow().is_empty());
    assert!(response.report.is_empty());
    assert_eq!(response.warnings, vec![ScanWarning::EmptyInput]);
}

#[test]
fn test_oversized_record_is_sent_alone_with_warning() {
    let content = wfp(&["big.c"]);
    let size = content.len();
    let client = MockIdentificationClient::with_responses(vec![results(json!({"big.c": []}))]);
    let use_case = ScanWfpUseCase::new(
        MockWfpReader { content },
        client,
        MockProgressReporter::default(),
    );

    let response = use_case.execute(request(OutputFormat::Plain, 10)).unwrap();

    assert_eq!(
        response.warnings,
        vec![ScanWarning::OversizedBatch {
            batch: 1,
            size,
            limit: 10,
        }]
    );
    assert_eq!(response.report.len(), 1);
}

#[test]
fn test_sbom_format_extracts_components() {
    let client = MockIdentificationClient::with_responses(vec![results(json!({
        "a.c": [zlib_match()],
        "b.c": [zlib_match(), {"id": "snippet", "component": "nopurl"}]
    }))]);
    let use_case = ScanWfpUseCase::new(
        MockWfpReader {
            content: wfp(&["a.c", "b.c"]),
        },
        client,
        MockProgressReporter::default(),
    );

    let response = use_case
        .execute(request(OutputFormat::CycloneDx, MAX_LIMIT))
        .unwrap();

    let components = response.components.unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(
        components.get("pkg:github/madler/zlib").unwrap().license(),
        Some("Zlib")
    );
    assert_eq!(response.warnings.len(), 2);
    assert!(matches!(
        response.warnings[0],
        ScanWarning::DuplicateComponent { .. }
    ));
    assert!(matches!(response.warnings[1], ScanWarning::MissingPurl { .. }));
}

#[test]
fn test_read_failure_aborts_scan() {
    let use_case = ScanWfpUseCase::new(
        BrokenWfpReader,
        MockIdentificationClient::default(),
        MockProgressReporter::default(),
    );

    let err = use_case
        .execute(ScanRequest::with_defaults(WfpSource::Stdin))
        .unwrap_err();

    assert!(err.to_string().contains("Failed to read fingerprints"));
    assert!(err.to_string().contains("device went away"));
}

const MAX_LIMIT: usize = crate::scanning::domain::MAX_POST_SIZE;
