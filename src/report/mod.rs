//! User-facing output formatting.
//!
//! We keep formatting code in one place so:
//! - the parse/derive/write code stays clean and testable
//! - output changes are localized

use std::path::Path;

use crate::app::pipeline::RunOutput;

/// Line printed before a file is converted.
pub fn format_file_header(path: &Path) -> String {
    format!("Converting {}", path.display())
}

/// Row-count line printed after a file converts successfully.
pub fn format_file_summary(out: &RunOutput) -> String {
    format!("Converted data length: {}", out.rows_converted)
}

/// Totals line for directory mode.
pub fn format_dir_summary(results: &[RunOutput]) -> String {
    let total_rows: usize = results.iter().map(|r| r.rows_converted).sum();
    format!(
        "Converted {} file(s), {} row(s) total",
        results.len(),
        total_rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn summary_lines() {
        let out = RunOutput {
            path: PathBuf::from("data/mouth.csv"),
            rows_converted: 12,
        };
        assert_eq!(format_file_header(&out.path), "Converting data/mouth.csv");
        assert_eq!(format_file_summary(&out), "Converted data length: 12");
    }

    #[test]
    fn dir_summary_totals() {
        let results = vec![
            RunOutput {
                path: PathBuf::from("a.csv"),
                rows_converted: 3,
            },
            RunOutput {
                path: PathBuf::from("b.csv"),
                rows_converted: 0,
            },
        ];
        assert_eq!(format_dir_summary(&results), "Converted 2 file(s), 3 row(s) total");
    }
}
