//! Per-row feature computation.
//!
//! Pure math, no I/O: the ingest/export modules stay free of derivation
//! logic and this module is trivially testable.

use crate::domain::{Dataset, FeatureRow, LandmarkRow};

/// Derive the three scalar features from one landmark row.
///
/// - mouth width: horizontal distance between the oral commissures
/// - dental show: vertical extent between the top and bottom markers
/// - smile angle: orientation (radians) of the line from the left commissure
///   to the bottom dental-show marker, via two-argument arctangent
pub fn derive_row(row: &LandmarkRow) -> FeatureRow {
    FeatureRow {
        mouth_width: (row.commissure_left.x - row.commissure_right.x).abs(),
        dental_show: (row.dental_show_top.y - row.dental_show_bottom.y).abs(),
        smile_angle: f64::atan2(
            row.commissure_left.y - row.dental_show_bottom.y,
            row.commissure_left.x - row.dental_show_bottom.x,
        ),
    }
}

/// Derive features for every row, preserving order.
pub fn derive_all(dataset: &Dataset) -> Vec<FeatureRow> {
    dataset.rows.iter().map(derive_row).collect()
}
