//! IRSA river report scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use irsa::{
    error::Result,
    models::{Config, RunOutcome},
    pipeline,
    services::PdfPageReader,
    storage::{JsonFileStorage, RecordStorage},
    utils::http::HttpTransport,
};

/// irsa - IRSA daily river report scraper
#[derive(Parser, Debug)]
#[command(
    name = "irsa",
    version,
    about = "Scrapes IRSA daily river reports into JSON"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run full pipeline: Discover → Download → Extract → Save
    Run,

    /// Extract fields from local PDF files
    Extract {
        /// PDF files to extract, in output order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (default: paths.output_file from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the summary of an existing output file
    Summary {
        /// Output file to read (default: paths.output_file from config)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_summary(config: &Config, records: &[irsa::models::ExtractionRecord]) -> Result<()> {
    let catalogue = config.catalogue()?;
    if let Some(summary) = pipeline::render_summary(records, &catalogue) {
        println!("\n{summary}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<bool> {
    let config = Config::load_or_default(&cli.config);
    log::info!("Loaded configuration from {}", cli.config.display());

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let transport = HttpTransport::from_config(&config.http)?;
            let storage = JsonFileStorage::new(&config.paths.output_file);

            let outcome = pipeline::run_pipeline(&config, &transport, &PdfPageReader, &storage)?;
            match &outcome {
                RunOutcome::Completed(report) => {
                    print_summary(&config, &report.records)?;
                    log::info!(
                        "Successfully processed {} PDF(s) into {}",
                        report.records.len(),
                        report.location
                    );
                }
                RunOutcome::NoLinks => log::error!("No data extracted: no report links found"),
                RunOutcome::NoDocuments { attempted } => log::error!(
                    "No data extracted: none of {attempted} report(s) could be downloaded"
                ),
            }
            Ok(outcome.is_success())
        }

        Command::Extract { files, output } => {
            let output = output.unwrap_or_else(|| config.paths.output_file.clone());
            let storage = JsonFileStorage::new(output);

            let batch = pipeline::run_extract(&config, &PdfPageReader, &storage, &files)?;
            print_summary(&config, &batch.records)?;
            log::info!(
                "Extracted {} document(s) into {} ({} unreadable)",
                batch.records.len(),
                storage.location(),
                batch.failures
            );
            Ok(!batch.records.is_empty())
        }

        Command::Summary { input } => {
            let input = input.unwrap_or_else(|| config.paths.output_file.clone());
            let records = JsonFileStorage::new(input).load_records()?;
            if records.is_empty() {
                log::warn!("No records to summarize");
                return Ok(false);
            }
            print_summary(&config, &records)?;
            Ok(true)
        }

        Command::Validate => {
            pipeline::run_validate(&config)?;
            log::info!("All validations passed!");
            Ok(true)
        }
    }
}

/// Main entry point for the CLI application.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("IRSA River Data Scraper starting...");

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
