use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// How much diagnostic output goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Status lines and the progress bar
    #[default]
    Normal,
    /// Adds per-batch details
    Debug,
    /// Adds file lists and context hints
    Trace,
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes everything to stderr so stdout carries only the report.
/// Lines printed while the progress bar is visible are routed through
/// `ProgressBar::suspend` so the bar is redrawn below them.
pub struct StderrProgressReporter {
    verbosity: Verbosity,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            progress_bar: RefCell::new(None),
        }
    }

    /// A zero total means the file count is unknown (stdin); a spinner is shown
    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = if total == 0 {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("   {spinner:.green} {pos} file(s) - {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        } else {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
            );
            pb
        };
        *pb_option = Some(pb.clone());
        pb
    }

    fn print(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", message)),
            _ => eprintln!("{}", message),
        }
    }

    fn finish_progress(&self) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            self.print(message);
        }
    }

    fn report_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            self.print(message);
        }
    }

    fn report_trace(&self, message: &str) {
        if self.verbosity >= Verbosity::Trace {
            self.print(message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print(message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress();
        if self.verbosity >= Verbosity::Normal {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}
