//! Command-line parsing for the landmark feature converter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parse/derive/write code: clap resolves the surface, `app` dispatches.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Top-level CLI.
///
/// Exactly one input source is required: a single file (`--file`) or a
/// directory of files (`--dir`).
#[derive(Debug, Parser)]
#[command(
    name = "mouthfmt",
    version,
    about = "Convert oral-commissure & dental-show landmark data to neural-net input features"
)]
#[command(group = ArgGroup::new("input").required(true).args(["file", "dir"]))]
pub struct Cli {
    /// Space-delimited landmark file to convert in place (must end in `.csv`).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Convert every `.csv` file directly inside this directory.
    #[arg(short = 'd', long, value_name = "DIR", conflicts_with = "file")]
    pub dir: Option<PathBuf>,
}
