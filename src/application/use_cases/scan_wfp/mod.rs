use crate::application::dto::{ScanRequest, ScanResponse, ScanSummary};
use crate::application::use_cases::{DispatchOutcome, ScanDispatcher};
use crate::ports::outbound::{IdentificationClient, ProgressReporter, WfpReader};
use crate::scanning::domain::{Batch, ScanWarning};
use crate::scanning::services::{
    BatchAssembler, ComponentExtractor, HintTracker, MetadataGenerator, ResultAggregator,
    WfpParser,
};
use crate::shared::error::ScanError;
use crate::shared::Result;

/// ScanWfpUseCase - Core use case for scanning a fingerprint stream
///
/// Parses the stream, packs records into size-bounded batches and sends
/// them one at a time, each request carrying the dominant component hint
/// learned from the batches before it. Failed batches are reported and
/// skipped; the scan itself only fails when the input cannot be read.
///
/// # Type Parameters
/// * `R` - WfpReader implementation
/// * `C` - IdentificationClient implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanWfpUseCase<R, C, PR> {
    wfp_reader: R,
    client: C,
    progress_reporter: PR,
}

impl<R, C, PR> ScanWfpUseCase<R, C, PR>
where
    R: WfpReader,
    C: IdentificationClient,
    PR: ProgressReporter,
{
    /// Creates a new ScanWfpUseCase with injected dependencies
    pub fn new(wfp_reader: R, client: C, progress_reporter: PR) -> Self {
        Self {
            wfp_reader,
            client,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened or a read fails
    /// part-way through. Service failures never surface here.
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        let total_files = self.wfp_reader.count_files(&request.source)?;
        if let Some(total) = total_files {
            self.progress_reporter
                .report(&format!("🔍 Scanning {} file(s)...", total));
        }

        let reader = self.wfp_reader.open(&request.source)?;
        let batches = BatchAssembler::new(WfpParser::new(reader), request.post_size_limit);

        let dispatcher = ScanDispatcher::new(&self.client);
        let mut tracker = HintTracker::new();
        let mut aggregator = ResultAggregator::new();
        let mut summary = ScanSummary::default();
        let mut warnings = Vec::new();

        for batch in batches {
            let batch = batch.map_err(|e| ScanError::WfpReadError {
                path: request.source.label(),
                details: e.to_string(),
            })?;

            summary.files_submitted += batch.file_count();
            summary.batches_dispatched += 1;
            self.announce_batch(
                &batch,
                &summary,
                total_files,
                request.post_size_limit,
                &mut warnings,
            );

            // The hint for batch N reflects batches 1..N-1 only
            if let Some(context) = tracker.current().as_context() {
                self.progress_reporter.report_trace(&format!(
                    "Using context '{}' ({} hit(s))",
                    context,
                    tracker.current().hit_count()
                ));
            }
            match dispatcher.dispatch(&batch, tracker.current()) {
                DispatchOutcome::Matched {
                    matches,
                    warnings: batch_warnings,
                } => {
                    self.record_warnings(batch_warnings, &mut warnings);
                    tracker.update(&matches);
                    let replaced = aggregator.merge(matches);
                    if replaced > 0 {
                        self.progress_reporter.report_debug(&format!(
                            "{} file(s) in batch {} were already in the report and were replaced",
                            replaced,
                            batch.sequence()
                        ));
                    }
                }
                DispatchOutcome::NoResult { reason } => {
                    summary.batches_failed += 1;
                    self.record_warnings(
                        vec![ScanWarning::BatchDispatchFailure {
                            batch: batch.sequence(),
                            files: batch.file_count(),
                            reason,
                        }],
                        &mut warnings,
                    );
                }
            }

            self.progress_reporter.report_progress(
                summary.files_submitted,
                total_files.unwrap_or(0),
                Some(&format!("batch {}", batch.sequence())),
            );
        }

        if summary.files_submitted == 0 {
            self.record_warnings(vec![ScanWarning::EmptyInput], &mut warnings);
        }

        summary.dominant_hint = tracker.current().clone();
        let report = aggregator.finish();

        let components = if request.format.needs_components() {
            let extraction = ComponentExtractor::extract(&report);
            self.record_warnings(extraction.warnings, &mut warnings);
            Some(extraction.components)
        } else {
            None
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} file(s) in {} batch(es): {} file(s) in report, {} identified match(es)",
            summary.files_submitted,
            summary.batches_dispatched,
            report.len(),
            report.identified_match_count()
        ));
        if summary.batches_failed > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} batch(es) returned no result",
                summary.batches_failed
            ));
        }

        Ok(ScanResponse::new(
            report,
            components,
            MetadataGenerator::generate_default_metadata(),
            summary,
            warnings,
        ))
    }

    fn announce_batch(
        &self,
        batch: &Batch,
        summary: &ScanSummary,
        total_files: Option<usize>,
        limit: usize,
        warnings: &mut Vec<ScanWarning>,
    ) {
        if batch.is_oversized(limit) {
            self.record_warnings(
                vec![ScanWarning::OversizedBatch {
                    batch: batch.sequence(),
                    size: batch.cumulative_bytes(),
                    limit,
                }],
                warnings,
            );
        }

        let total = total_files.map_or_else(|| "?".to_string(), |t| t.to_string());
        self.progress_reporter.report_debug(&format!(
            "Sending {} ({}) of {} ({} bytes) files",
            batch.file_count(),
            summary.files_submitted,
            total,
            batch.cumulative_bytes()
        ));
        self.progress_reporter.report_trace(&format!(
            "Batch {} files: {}",
            batch.sequence(),
            batch.display_paths().collect::<Vec<_>>().join(", ")
        ));
    }

    fn record_warnings(&self, new_warnings: Vec<ScanWarning>, warnings: &mut Vec<ScanWarning>) {
        for warning in new_warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
            warnings.push(warning);
        }
    }
}

#[cfg(test)]
mod tests;
