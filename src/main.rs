mod analyzer;
mod cli;
mod config;
mod discovery;
mod model;
mod normalizer;
mod parser;
mod report;
mod session;
mod storage;
mod utils;

use analyzer::{DatasetStats, search};
use clap::Parser;
use cli::Cli;
use config::{AppConfig, load_config};
use discovery::{DirectoryScanner, Discovery};
use model::DiscoveryError;
use parser::PriceListParser;
use report::{export_html, write_results};
use session::Session;
use std::collections::HashSet;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use storage::{Dataset, ingest};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let config: AppConfig = match load_config(&cli.config) {
        Ok(cfg) => cli.apply(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let files = discover_files(&config);
    let (dataset, diagnostics) = ingest(&files, &PriceListParser::new());
    if !diagnostics.is_empty() {
        let affected: HashSet<&str> = diagnostics.iter().map(|d| d.file()).collect();
        warn!(
            "{} rows or files were skipped across {} files",
            diagnostics.len(),
            affected.len()
        );
    }
    if dataset.is_empty() {
        warn!("No records loaded, every search will come back empty");
    }

    let stats = DatasetStats::calculate(&dataset);
    info!(
        records = stats.records,
        files = stats.files,
        min = ?stats.min,
        max = ?stats.max,
        mean = ?stats.mean,
        "Dataset loaded"
    );

    let result: Result<(), Box<dyn Error>> = match &cli.query {
        Some(query) => run_once(&dataset, &config, query),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Session::new(&dataset, &config)
                .run(stdin.lock(), &mut stdout)
                .map_err(Into::into)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// A discovery failure leaves the run with an empty dataset.
fn discover_files(config: &AppConfig) -> Vec<PathBuf> {
    let scanner = DirectoryScanner::new(&config.file_marker, &config.extension);
    match scanner.discover(&config.price_dir) {
        Ok(files) => {
            info!("Found {} price lists in {}", files.len(), config.price_dir.display());
            files
        }
        Err(e @ DiscoveryError::NoMatchingFiles { .. }) => {
            warn!("{}", e);
            Vec::new()
        }
        Err(e) => {
            error!("File discovery failed: {}", e);
            Vec::new()
        }
    }
}

fn run_once(dataset: &Dataset, config: &AppConfig, query: &str) -> Result<(), Box<dyn Error>> {
    let results = search(dataset, &query.trim().to_lowercase());
    let mut stdout = io::stdout();
    write_results(&mut stdout, &results, config.name_width)?;
    export_html(dataset, &config.report_path)?;
    Ok(())
}
