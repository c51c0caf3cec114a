//! Feature file rewrite.
//!
//! The write phase consumes derived rows and overwrites the original file:
//! one record per line, three fields per record, each formatted fixed-point
//! with exactly six fractional digits, single-space separated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::FeatureRow;
use crate::error::AppError;

/// Overwrite `path` with the derived feature rows.
pub fn write_features(path: &Path, rows: &[FeatureRow]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to rewrite '{}': {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    write_features_to(&mut writer, rows)?;
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to rewrite '{}': {e}", path.display())))
}

/// Write feature rows to any sink.
pub fn write_features_to<W: Write>(writer: &mut W, rows: &[FeatureRow]) -> Result<(), AppError> {
    for row in rows {
        writeln!(
            writer,
            "{:.6} {:.6} {:.6}",
            row.mouth_width, row.dental_show, row.smile_angle
        )
        .map_err(|e| AppError::new(2, format!("Failed to write output row: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_six_fractional_digits() {
        let rows = [FeatureRow {
            mouth_width: 2.0,
            dental_show: 2.0,
            smile_angle: 3.0 * std::f64::consts::FRAC_PI_4,
        }];
        let mut out = Vec::new();
        write_features_to(&mut out, &rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2.000000 2.000000 2.356194\n");
    }

    #[test]
    fn one_line_per_row_no_trailing_blank_line() {
        let row = FeatureRow {
            mouth_width: 1.0,
            dental_show: 0.5,
            smile_angle: -0.25,
        };
        let mut out = Vec::new();
        write_features_to(&mut out, &[row, row]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "1.000000 0.500000 -0.250000\n1.000000 0.500000 -0.250000\n");
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut out = Vec::new();
        write_features_to(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn fixed_point_never_scientific() {
        let rows = [FeatureRow {
            mouth_width: 123456.789012345,
            dental_show: 0.0000004,
            smile_angle: 0.1,
        }];
        let mut out = Vec::new();
        write_features_to(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "123456.789012 0.000000 0.100000\n");
        assert!(!text.contains('e') && !text.contains('E'));
    }
}
