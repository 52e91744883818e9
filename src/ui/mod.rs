//! # User Interface
//!
//! Colored terminal output for sweep progress and summaries.

pub mod log;

pub use log::{debug, error, info, mode, warn, ConsoleReport, Log};
