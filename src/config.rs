//! Configuration file support for wfp-scanner.
//!
//! Provides YAML-based configuration through `wfp-scanner.config.yml` files,
//! and resolution of the effective settings from CLI arguments, the config
//! file and built-in defaults (in that order of precedence).

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wfp_scanner::adapters::outbound::network::{ScanossClientConfig, DEFAULT_API_URL};
use wfp_scanner::application::dto::OutputFormat;
use wfp_scanner::scanning::domain::MAX_POST_SIZE;
use wfp_scanner::shared::error::ScanError;
use wfp_scanner::shared::Result;

pub const CONFIG_FILENAME: &str = "wfp-scanner.config.yml";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Scan types the identification service accepts alongside an SBOM
const SCAN_TYPES: [&str; 2] = ["identify", "blacklist"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub post_size_limit: Option<usize>,
    pub scan_type: Option<String>,
    pub sbom: Option<PathBuf>,
    pub flags: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None` defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub post_size_limit: Option<usize>,
    pub scan_type: Option<String>,
    pub sbom: Option<PathBuf>,
    pub flags: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub post_size_limit: usize,
    pub api_url: String,
    pub api_key: Option<String>,
    pub scan_type: Option<String>,
    pub sbom: Option<PathBuf>,
    pub flags: Option<String>,
    pub timeout: Duration,
    pub retries: u32,
}

impl ScanSettings {
    /// Merges CLI values over the config file over defaults, then validates
    pub fn resolve(cli: SettingsOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (cli.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse::<OutputFormat>().map_err(|e| ScanError::ConfigError {
                message: e,
                hint: "Set 'format' to plain, cyclonedx or markdown".to_string(),
            })?,
            (None, None) => OutputFormat::default(),
        };

        let settings = Self {
            format,
            output: cli.output.or(config.output),
            post_size_limit: cli
                .post_size_limit
                .or(config.post_size_limit)
                .unwrap_or(MAX_POST_SIZE),
            api_url: cli
                .api_url
                .or(config.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: cli.api_key.or(config.api_key),
            scan_type: cli.scan_type.or(config.scan_type),
            sbom: cli.sbom.or(config.sbom),
            flags: cli.flags.or(config.flags),
            timeout: Duration::from_secs(
                cli.timeout_secs
                    .or(config.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            retries: cli.retries.or(config.retries).unwrap_or(0),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.post_size_limit == 0 {
            return Err(config_error(
                "post size limit must be greater than zero",
                "The service accepts up to 64 KiB per request; the default is 65536",
            ));
        }

        if self.timeout.is_zero() {
            return Err(config_error(
                "timeout must be greater than zero",
                "Give the timeout in whole seconds, e.g. --timeout 120",
            ));
        }

        match (&self.scan_type, &self.sbom) {
            (Some(scan_type), Some(_)) if !SCAN_TYPES.contains(&scan_type.as_str()) => {
                Err(config_error(
                    &format!("unknown scan type '{}'", scan_type),
                    "Use --scan-type identify or --scan-type blacklist",
                ))
            }
            (Some(_), None) => Err(config_error(
                "a scan type was given without an SBOM assets file",
                "Pass --sbom <FILE> together with --scan-type",
            )),
            (None, Some(_)) => Err(config_error(
                "an SBOM assets file was given without a scan type",
                "Pass --scan-type identify or --scan-type blacklist together with --sbom",
            )),
            _ => Ok(()),
        }
    }

    /// Client settings for the identification service
    pub fn client_config(&self, assets: Option<String>) -> ScanossClientConfig {
        ScanossClientConfig {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            scan_type: self.scan_type.clone(),
            assets,
            flags: self.flags.clone(),
            timeout: self.timeout,
            retries: self.retries,
        }
    }
}

fn config_error(message: &str, hint: &str) -> anyhow::Error {
    ScanError::ConfigError {
        message: message.to_string(),
        hint: hint.to_string(),
    }
    .into()
}
