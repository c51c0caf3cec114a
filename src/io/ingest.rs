//! Landmark ingest and validation.
//!
//! This module turns a space-delimited numeric file into a `Dataset` that is
//! safe to derive features from.
//!
//! Design goals:
//! - **Strict schema**: exactly 8 numeric fields per row, or the whole
//!   conversion aborts (exit code 3) — there is no partial-row recovery
//! - **Line-numbered errors** so a bad row is easy to find in the source file
//! - **Separation of concerns**: no feature math here, and the file handle is
//!   opened by a thin wrapper so tests can parse from in-memory buffers

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Dataset, Field, LandmarkRow};
use crate::error::AppError;

/// Open `path` and parse its contents into a `Dataset`.
///
/// The file is read to completion before this returns; nothing holds the
/// file open afterwards, so the caller may reopen the same path for writing.
pub fn load_landmarks(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open input '{}': {e}", path.display()))
    })?;
    read_landmarks(file)
}

/// Parse space-delimited landmark rows from any reader.
///
/// Every row must contain exactly [`Field::COUNT`] parseable floats; the
/// first malformed row fails the whole parse. Blank lines are skipped.
pub fn read_landmarks<R: Read>(reader: R) -> Result<Dataset, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        // Headerless input: records() index 0 is file line 1.
        let line = idx + 1;

        let record = result
            .map_err(|e| AppError::new(3, format!("Row {line}: CSV parse error: {e}")))?;

        rows.push(parse_row(&record, line)?);
    }

    Ok(Dataset { rows })
}

fn parse_row(record: &StringRecord, line: usize) -> Result<LandmarkRow, AppError> {
    if record.len() != Field::COUNT {
        return Err(AppError::new(
            3,
            format!(
                "Row {line}: expected {} fields, found {}.",
                Field::COUNT,
                record.len()
            ),
        ));
    }

    let mut values = [0.0f64; Field::COUNT];
    for (i, token) in record.iter().enumerate() {
        values[i] = token.parse::<f64>().map_err(|_| {
            AppError::new(3, format!("Row {line}: invalid numeric value '{token}'."))
        })?;
    }

    Ok(LandmarkRow::from_fields(values))
}
