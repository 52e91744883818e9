//! # xmpsweep Library
//!
//! Finds XMP sidecar files whose whole content is a known "empty" body and
//! reports or deletes them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod ui;
