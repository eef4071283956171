mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::{discover_config, load_config_from_path, ScanSettings};
use std::process;
use wfp_scanner::prelude::*;
use wfp_scanner::shared::error::ExitCode;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = ScanSettings::resolve(args.overrides(), config)?;

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let assets = settings
        .sbom
        .as_deref()
        .map(|path| reader.read_assets(path))
        .transpose()?;
    let client = ScanossApiClient::new(settings.client_config(assets))?;
    let progress_reporter = StderrProgressReporter::new(args.verbosity());

    progress_reporter.report_debug(&format!(
        "Using identification service at {} (post size limit {} bytes)",
        client.api_url(),
        settings.post_size_limit
    ));

    // Create use case with injected dependencies
    let use_case = ScanWfpUseCase::new(reader, client, progress_reporter);

    let request = ScanRequest::new(args.source(), settings.format, settings.post_size_limit);
    let response = use_case.execute(request)?;

    // Display progress message
    if args.verbosity() > Verbosity::Quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    // Present output
    let destination = PresenterType::from_destination(settings.output.clone());
    let presenter = PresenterFactory::create(destination);
    presenter.present(&formatted_output)?;

    if let (Some(path), true) = (&settings.output, args.verbosity() > Verbosity::Quiet) {
        eprintln!("✅ Output complete: {}", path.display());
    }

    Ok(())
}
