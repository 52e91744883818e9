//! # Command Implementations

pub mod sweep;

pub use sweep::{run, Report, SweepOptions};
