//! Shared domain types.
//!
//! These types are intentionally lightweight: a dataset is fully materialized
//! in memory before anything is written back, so plain owned values are fine.

/// Positional layout of an 8-field input row.
///
/// Keeping the layout as an enum scoped to this crate (rather than loose
/// integer constants) makes the wire format self-documenting: the variant
/// order *is* the column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Field {
    OralCommissureLeftX = 0,
    OralCommissureLeftY = 1,
    OralCommissureRightX = 2,
    OralCommissureRightY = 3,
    DentalShowTopX = 4,
    DentalShowTopY = 5,
    DentalShowBottomX = 6,
    DentalShowBottomY = 7,
}

impl Field {
    /// Number of columns in a well-formed input row.
    pub const COUNT: usize = 8;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A 2-D landmark coordinate (pixel or normalized space; may be negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One parsed input record: mouth-corner and dental-show marker positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkRow {
    pub commissure_left: Point,
    pub commissure_right: Point,
    pub dental_show_top: Point,
    pub dental_show_bottom: Point,
}

impl LandmarkRow {
    /// Build a row from column values in `Field` order.
    pub fn from_fields(v: [f64; Field::COUNT]) -> Self {
        Self {
            commissure_left: Point {
                x: v[Field::OralCommissureLeftX.index()],
                y: v[Field::OralCommissureLeftY.index()],
            },
            commissure_right: Point {
                x: v[Field::OralCommissureRightX.index()],
                y: v[Field::OralCommissureRightY.index()],
            },
            dental_show_top: Point {
                x: v[Field::DentalShowTopX.index()],
                y: v[Field::DentalShowTopY.index()],
            },
            dental_show_bottom: Point {
                x: v[Field::DentalShowBottomX.index()],
                y: v[Field::DentalShowBottomY.index()],
            },
        }
    }
}

/// One derived output record.
///
/// Invariants: `mouth_width >= 0`, `dental_show >= 0`,
/// `smile_angle` in `(-pi, pi]` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    pub mouth_width: f64,
    pub dental_show: f64,
    pub smile_angle: f64,
}

/// An ordered, fully materialized set of input rows.
///
/// Order is preserved end to end: row `i` of the dataset produces line `i`
/// of the rewritten file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<LandmarkRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
