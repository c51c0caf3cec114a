//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the positional layout of an input row (`Field`)
//! - parsed landmark records (`Point`, `LandmarkRow`, `Dataset`)
//! - derived output records (`FeatureRow`)

pub mod types;

pub use types::*;
