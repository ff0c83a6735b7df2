// src/main.rs
mod extractors;
mod report;
mod schema;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use scraper::Html;

use report::ReportType;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the PMI report extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an already-fetched report HTML document
    #[arg(short, long)]
    input: PathBuf,

    /// Report variant: 'manufacturing' (m) or 'services' (s)
    #[arg(short, long)]
    report_type: String,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Period label used in output filenames (e.g. 2025-07); defaults to the current month
    #[arg(short, long)]
    period: Option<String>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    let report_type: ReportType = args
        .report_type
        .parse()
        .map_err(AppError::Config)?;
    let period = args
        .period
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m").to_string());

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Read and parse the document
    let html_content = std::fs::read_to_string(&args.input)?;
    tracing::info!(
        "Read document from {} ({} bytes)",
        args.input.display(),
        html_content.len()
    );
    let document = Html::parse_document(&html_content);

    // 5. Assemble the report
    let assembled = extractors::assemble(&document, report_type)?;
    tracing::info!(
        "Assembled {} report: {}/{} sections present, rankings: {}, comments: {}",
        report_type,
        assembled.present_count(),
        assembled.sections.len(),
        assembled.rankings.is_some(),
        assembled.comments.is_some()
    );
    let missing = assembled.missing_sections();
    if !missing.is_empty() {
        tracing::warn!("Sections missing from this document: {:?}", missing);
    }

    // 6. Persist the report and its metadata
    match storage.save_report(&assembled, &period) {
        Ok(path) => tracing::info!("Saved report content to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save report content: {}", e),
    }
    match storage.save_report_metadata(&assembled, &period) {
        Ok(path) => tracing::info!("Saved report metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save report metadata: {}", e),
    }

    Ok(())
}
