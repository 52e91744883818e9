//! Unified logging system

use colored::*;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::commands::sweep::Report;
use crate::core::{Disposition, Summary};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

/// Verbose-only, on stderr so stdout keeps one line per event
pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

/// First line of every run
pub fn mode(force: bool) {
	if force {
		warn("Will actually delete empty sidecar files.");
	} else {
		info("Will not actually delete any files, but will report what would be deleted.");
	}
}

fn file_name(path: &Path) -> String {
	path.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}

/// Prints sweep progress to stdout
pub struct ConsoleReport;

impl Report for ConsoleReport {
	fn root(&mut self, root: &Path) {
		println!(
			"{} {}",
			"Working on folder:".bright_blue().bold(),
			root.display().to_string().bright_white()
		);
	}

	fn directory(&mut self, dir: &Path) {
		println!("{} {}", "visiting:".dimmed(), dir.display());
	}

	fn file(&mut self, path: &Path, disposition: Disposition) {
		let name = file_name(path);
		let status = match disposition {
			Disposition::Deleted => "deleted (empty sidecar)".bright_red(),
			Disposition::WouldDelete => "not deleted (empty sidecar but no force option)".yellow(),
			Disposition::Retained => "retained (not an empty sidecar)".dimmed(),
		};
		println!("  {} {}", name.bright_white(), status);
	}

	fn failure(&mut self, path: &Path, err: &anyhow::Error) {
		println!(
			"  {} {}",
			file_name(path).bright_white(),
			format!("skipped ({:#})", err).bright_red()
		);
	}

	fn summary(&mut self, summary: &Summary) {
		println!("{} {}", "Number of sidecars deleted:".bright_blue(), summary.deleted);
		println!("{} {}", "Number of sidecars pretend-deleted:".bright_blue(), summary.pretend_deleted);
		println!("{} {}", "Number of sidecars retained:".bright_blue(), summary.retained);
	}
}
