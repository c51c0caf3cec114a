//! `mouth-metrics` library crate.
//!
//! The binary (`mouthfmt`) is a thin wrapper around this library so that:
//!
//! - the parse/derive/write phases are testable without spawning processes
//! - file I/O stays at the edges (in-memory readers/sinks in tests)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod report;
