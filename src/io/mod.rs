//! Input/output helpers.
//!
//! - landmark file ingest + validation (`ingest`)
//! - feature file rewrite (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
