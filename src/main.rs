//! xmpsweep - remove empty XMP sidecars
//!
//! Photo library exports leave one sidecar per image even when there is no
//! metadata to keep. This walks the given folders and clears those out.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::time::Instant;

use xmpsweep::cli::Cli;
use xmpsweep::commands::{self, SweepOptions};
use xmpsweep::config;
use xmpsweep::core::TemplateSet;
use xmpsweep::ui::{self, ConsoleReport, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	if let Err(e) = run_sweep(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run_sweep(cli: Cli) -> Result<()> {
	let templates = load_templates(&cli)?;
	let options = SweepOptions {
		force: cli.force,
		keep_going: cli.keep_going,
	};

	ui::mode(options.force);

	let start = Instant::now();
	let summary = commands::run(&cli.directories, &options, &templates, &mut ConsoleReport)?;
	ui::debug(&format!(
		"Classified {} sidecars in {:.2}s",
		summary.candidates(),
		start.elapsed().as_secs_f32()
	));

	if summary.failed > 0 {
		ui::warn(&format!("{} sidecars skipped after errors", summary.failed));
	}

	if let Some(path) = &cli.report {
		let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
		fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))?;
		ui::debug(&format!("Wrote report: {}", path.display()));
	}

	Ok(())
}

fn load_templates(cli: &Cli) -> Result<TemplateSet> {
	let mut templates = TemplateSet::builtin();

	if let Some(path) = config::templates_file(cli.templates.clone()) {
		let added = templates.load_extra(&path)?;
		ui::debug(&format!("Loaded {} extra templates from {}", added, path.display()));
	}

	ui::debug(&format!("{} empty-sidecar templates active", templates.len()));
	Ok(templates)
}
