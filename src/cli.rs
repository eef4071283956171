use clap::Parser;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use wfp_scanner::adapters::outbound::console::Verbosity;
use wfp_scanner::application::dto::OutputFormat;
use wfp_scanner::ports::outbound::WfpSource;

/// Scan winnowing fingerprints against a code identification service
#[derive(Parser, Debug)]
#[command(name = "wfp-scanner")]
#[command(version)]
#[command(
    about = "Scan winnowing fingerprints (WFP) against a code identification service",
    long_about = None
)]
pub struct Args {
    /// WFP file to scan ('-' reads from stdin)
    #[arg(
        value_name = "WFP",
        required_unless_present = "wfp_text",
        conflicts_with = "wfp_text"
    )]
    pub wfp: Option<PathBuf>,

    /// Scan fingerprint text given on the command line instead of a file
    #[arg(long, value_name = "FINGERPRINT")]
    pub wfp_text: Option<String>,

    /// Output format: plain (raw JSON), cyclonedx or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./wfp-scanner.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Identification service URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key sent with every request
    #[arg(short, long = "key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Maximum payload size per request, in bytes
    #[arg(long = "post-size", value_name = "BYTES")]
    pub post_size: Option<usize>,

    /// How the SBOM assets file is applied: identify or blacklist
    #[arg(long, value_parser = ["identify", "blacklist"])]
    pub scan_type: Option<String>,

    /// SBOM assets JSON file sent with every request (requires --scan-type)
    #[arg(long, value_name = "FILE")]
    pub sbom: Option<PathBuf>,

    /// Engine flags passed through to the service
    #[arg(long)]
    pub flags: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Extra attempts for a failed request
    #[arg(long)]
    pub retries: Option<u32>,

    /// Print per-batch details
    #[arg(short, long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Print file lists and context hints for every batch
    #[arg(short, long, conflicts_with = "quiet")]
    pub trace: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Fingerprint source named on the command line
    pub fn source(&self) -> WfpSource {
        match (&self.wfp_text, &self.wfp) {
            (Some(text), _) => WfpSource::Text(text.clone()),
            (None, Some(path)) => WfpSource::from_arg(path),
            (None, None) => WfpSource::Stdin,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.trace {
            Verbosity::Trace
        } else if self.debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Settings given explicitly; these win over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            format: self.format,
            output: self.output.clone(),
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            post_size_limit: self.post_size,
            scan_type: self.scan_type.clone(),
            sbom: self.sbom.clone(),
            flags: self.flags.clone(),
            timeout_secs: self.timeout,
            retries: self.retries,
        }
    }
}
