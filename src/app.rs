//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - validates the input path before touching the file
//! - runs the conversion pipeline
//! - prints the row-count report

use std::path::Path;

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;
use crate::report;

pub mod pipeline;

/// Entry point for the `mouthfmt` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match (cli.file, cli.dir) {
        (Some(file), None) => handle_file(&file),
        (None, Some(dir)) => handle_dir(&dir),
        // clap's arg group guarantees exactly one input source.
        _ => Err(AppError::new(2, "Must provide input data to format.")),
    }
}

fn handle_file(path: &Path) -> Result<(), AppError> {
    ensure_csv_extension(path)?;

    println!("{}", report::format_file_header(path));
    let out = pipeline::convert_file(path)?;
    println!("{}", report::format_file_summary(&out));

    Ok(())
}

fn handle_dir(dir: &Path) -> Result<(), AppError> {
    let mut results = Vec::new();
    for path in pipeline::csv_files_in(dir)? {
        println!("{}", report::format_file_header(&path));
        let out = pipeline::convert_file(&path)?;
        println!("{}", report::format_file_summary(&out));
        results.push(out);
    }

    println!("{}", report::format_dir_summary(&results));
    Ok(())
}

/// Reject non-`.csv` paths before any file access.
fn ensure_csv_extension(path: &Path) -> Result<(), AppError> {
    if path.extension().is_some_and(|ext| ext == "csv") {
        return Ok(());
    }

    let found = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    Err(AppError::new(
        2,
        format!("Must provide a csv file (found: '{found}')."),
    ))
}
