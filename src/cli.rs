use clap::builder::styling::{AnsiColor, Styles};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().bold())
		.usage(AnsiColor::Blue.on_default().bold())
		.literal(AnsiColor::Blue.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.valid(AnsiColor::Blue.on_default())
		.invalid(AnsiColor::Red.on_default())
}

#[derive(Parser, Debug)]
#[command(
	name = "xmpsweep",
	author,
	version,
	about = "Find and remove empty XMP sidecar files",
	long_about = "Walks each directory recursively and compares every .xmp file (any case) \
		against the known empty sidecar bodies. Without -f nothing is deleted; the run only \
		reports what would be removed.",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin} {dry_args}          {dry_desc}
  {bin} {force_args}       {force_desc}
  {bin} {extra_args}  {extra_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "xmpsweep".bright_blue(),
		dry_args = "~/Pictures",
		dry_desc = "Report empty sidecars".dimmed(),
		force_args = "-f ~/Pictures",
		force_desc = "Delete them".dimmed(),
		extra_args = "-t extra.json ./export",
		extra_desc = "Add templates from a JSON list".dimmed(),
	),
)]
pub struct Cli {
	/// Really delete empty sidecars (default only reports)
	#[arg(short = 'f', long = "force")]
	pub force: bool,

	/// Report unreadable or undeletable files and continue
	#[arg(long = "keep-going")]
	pub keep_going: bool,

	/// JSON array of extra empty-sidecar bodies (or XMPSWEEP_TEMPLATES)
	#[arg(short = 't', long = "templates", value_name = "FILE")]
	pub templates: Option<PathBuf>,

	/// Write the final counters as JSON to this file
	#[arg(long = "report", value_name = "FILE")]
	pub report: Option<PathBuf>,

	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,

	/// Top-level directories to sweep, in order
	#[arg(value_name = "DIR", required = true)]
	pub directories: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_force_and_directories() {
		let cli = Cli::try_parse_from(["xmpsweep", "-f", "a", "b"]).unwrap();
		assert!(cli.force);
		assert!(!cli.keep_going);
		assert_eq!(cli.directories, vec![PathBuf::from("a"), PathBuf::from("b")]);
	}

	#[test]
	fn dry_run_is_default() {
		let cli = Cli::try_parse_from(["xmpsweep", "photos"]).unwrap();
		assert!(!cli.force);
		assert!(cli.templates.is_none());
	}

	#[test]
	fn requires_a_directory() {
		assert!(Cli::try_parse_from(["xmpsweep", "-f"]).is_err());
	}

	#[test]
	fn rejects_unknown_flag() {
		assert!(Cli::try_parse_from(["xmpsweep", "-x", "photos"]).is_err());
	}

	#[test]
	fn help_wins_over_scan() {
		let err = Cli::try_parse_from(["xmpsweep", "-f", "photos", "--help"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
	}
}
