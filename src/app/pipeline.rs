//! Shared conversion workflow used by the file and directory modes.
//!
//! Keeping this in one place means both front-ends run the same two phases:
//! parse (file -> Dataset) -> derive -> overwrite
//!
//! `app` then focuses on dispatch and printing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::features;
use crate::io::{export, ingest};

/// All computed outputs of converting a single file.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub path: PathBuf,
    pub rows_converted: usize,
}

/// Convert one file in place.
///
/// The file is parsed to completion before any write begins, so a malformed
/// row leaves the original contents on disk. The overwrite itself is not
/// atomic: an interruption after `File::create` but before the final flush
/// can lose the original data. Known limitation of the in-place rewrite.
pub fn convert_file(path: &Path) -> Result<RunOutput, AppError> {
    let dataset = ingest::load_landmarks(path)?;
    let rows = features::derive_all(&dataset);
    export::write_features(path, &rows)?;

    Ok(RunOutput {
        path: path.to_path_buf(),
        rows_converted: rows.len(),
    })
}

/// List the `.csv` files directly inside `dir`, sorted for deterministic
/// conversion order.
pub fn csv_files_in(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        AppError::new(2, format!("Failed to read directory '{}': {e}", dir.display()))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AppError::new(2, format!("Failed to read directory '{}': {e}", dir.display()))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(AppError::new(
            2,
            format!("No .csv files found in '{}'.", dir.display()),
        ));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path(name: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("mouthfmt-{}-{n}-{name}", std::process::id()))
    }

    #[test]
    fn converts_file_in_place() {
        let path = scratch_path("roundtrip.csv");
        fs::write(&path, "0.0 1.0 2.0 0.0 1.0 2.0 1.0 0.0\n").unwrap();

        let out = convert_file(&path).unwrap();
        assert_eq!(out.rows_converted, 1);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "2.000000 2.000000 2.356194\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn conversion_is_deterministic() {
        let input = "0.5 -1.25 3.5 0.75 1.0 4.0 1.0 -2.0\n1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0\n";
        let a = scratch_path("det-a.csv");
        let b = scratch_path("det-b.csv");
        fs::write(&a, input).unwrap();
        fs::write(&b, input).unwrap();

        convert_file(&a).unwrap();
        convert_file(&b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());

        fs::remove_file(&a).unwrap();
        fs::remove_file(&b).unwrap();
    }

    #[test]
    fn malformed_row_leaves_file_untouched() {
        let path = scratch_path("bad.csv");
        let original = "0.0 1.0 2.0 0.0 1.0 2.0 1.0 0.0\n1.0 2.0 3.0 4.0 5.0 6.0 7.0\n";
        fs::write(&path, original).unwrap();

        let err = convert_file(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_converts_to_empty_file() {
        let path = scratch_path("empty.csv");
        fs::write(&path, "").unwrap();

        let out = convert_file(&path).unwrap();
        assert_eq!(out.rows_converted, 0);
        assert!(fs::read(&path).unwrap().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = convert_file(&scratch_path("nonexistent.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn directory_listing_filters_and_sorts_csv_files() {
        let dir = scratch_path("dirmode");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("b.csv"), "").unwrap();
        fs::write(dir.join("a.csv"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let paths = csv_files_in(&dir).unwrap();
        assert_eq!(paths, vec![dir.join("a.csv"), dir.join("b.csv")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn directory_without_csv_files_is_an_error() {
        let dir = scratch_path("emptydir");
        fs::create_dir(&dir).unwrap();

        let err = csv_files_in(&dir).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
