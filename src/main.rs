use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

use quex::{
    Config, ReportFormat,
    document::{FsSource, discover_documents, write_report},
    logging, render_report, run_batch,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse HTML files to extract student names and questions")]
struct Cli {
    /// Directory path containing HTML files to parse
    directory: PathBuf,

    /// Output file path to write parsed results
    output_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Read configuration from this file instead of the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            logging::init(&Config::default().log_filter, cli.verbose);
            error!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_filter, cli.verbose);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let documents = discover_documents(&cli.directory, &config.extensions)?;

    info!("Found {} HTML files to process...", documents.len());
    let results = run_batch(&FsSource, &documents);

    // Render fully before touching the output file
    let report = render_report(&results, &cli.format).context("Failed to render report")?;
    write_report(&cli.output_file, &report)?;

    if results.failed_count() > 0 {
        warn!("{} file(s) could not be parsed", results.failed_count());
    }
    info!("Successfully processed {} files", results.len());
    info!("Results written to: {}", cli.output_file.display());
    Ok(())
}
