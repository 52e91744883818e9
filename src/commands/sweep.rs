//! Sweep command - find and remove empty sidecars

use anyhow::{bail, Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::{is_candidate, Disposition, Summary, TemplateSet};

#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
	/// Actually delete matched files
	pub force: bool,
	/// Report read/delete failures and continue instead of aborting
	pub keep_going: bool,
}

/// Receives progress from a sweep, in walk order
pub trait Report {
	fn root(&mut self, root: &Path);
	fn directory(&mut self, dir: &Path);
	fn file(&mut self, path: &Path, disposition: Disposition);
	fn failure(&mut self, path: &Path, error: &anyhow::Error);
	fn summary(&mut self, summary: &Summary);
}

/// Walk every root in order and classify each sidecar.
pub fn run<R: Report>(
	roots: &[PathBuf],
	options: &SweepOptions,
	templates: &TemplateSet,
	report: &mut R,
) -> Result<Summary> {
	let mut summary = Summary::default();

	for root in roots {
		report.root(root);
		sweep_root(root, options, templates, report, &mut summary)?;
	}

	report.summary(&summary);
	Ok(summary)
}

fn sweep_root<R: Report>(
	root: &Path,
	options: &SweepOptions,
	templates: &TemplateSet,
	report: &mut R,
	summary: &mut Summary,
) -> Result<()> {
	let meta = fs::metadata(root).with_context(|| format!("Failed to walk {}", root.display()))?;
	if !meta.is_dir() {
		bail!("{} is not a directory", root.display());
	}

	let walker = WalkDir::new(root).sort_by(files_then_dirs);

	for entry in walker {
		let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
		let path = entry.path();

		if entry.file_type().is_dir() {
			report.directory(path);
			continue;
		}

		if !is_candidate(entry.file_name()) {
			continue;
		}

		// Links are not followed, so a linked directory named *.xmp shows up here
		if entry.path_is_symlink() && path.is_dir() {
			continue;
		}

		match process(path, options.force, templates) {
			Ok(disposition) => {
				summary.record(disposition);
				report.file(path, disposition);
			}
			Err(e) if options.keep_going => {
				summary.failed += 1;
				report.failure(path, &e);
			}
			Err(e) => return Err(e),
		}
	}

	Ok(())
}

fn process(path: &Path, force: bool, templates: &TemplateSet) -> Result<Disposition> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("Failed to read {}", path.display()))?;

	if !templates.is_empty_sidecar(&content) {
		return Ok(Disposition::Retained);
	}

	if !force {
		return Ok(Disposition::WouldDelete);
	}

	fs::remove_file(path).with_context(|| format!("Failed to delete {}", path.display()))?;
	Ok(Disposition::Deleted)
}

/// A directory's files come first, then its subdirectories, each by name
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
	a.file_type()
		.is_dir()
		.cmp(&b.file_type().is_dir())
		.then_with(|| a.file_name().cmp(b.file_name()))
}
