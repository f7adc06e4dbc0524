use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::{BoolishValueParser, Styles};
use clap::{ArgAction, ColorChoice, Parser};

use crate::app_dirs;

/// Command-line arguments accepted by the `flicks` binary.
#[derive(Parser, Debug)]
#[command(
	name = "flicks",
	version,
	long_version = long_version(),
	about = "Terminal movie search client for the OMDb API",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FLICKS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub no_config: bool,
	#[arg(
		short = 'k',
		long = "api-key",
		value_name = "KEY",
		env = "OMDB_API_KEY",
		hide_env_values = true,
		help = "OMDb API access key (default: from configuration)"
	)]
	pub api_key: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Initial search submitted on startup (default: Marvel)"
	)]
	pub query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub theme: Option<String>,
	#[arg(
		short = 'a',
		long = "auto-load",
		value_parser = BoolishValueParser::new(),
		help = "Fetch the next page automatically at the bottom of the list (default: enabled)"
	)]
	pub auto_load: Option<bool>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub list_themes: bool,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("flicks {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let parsed = CliArgs::try_parse_from(["flicks"]).expect("parses");
		assert!(parsed.config.is_empty());
		assert!(!parsed.no_config);
		assert!(parsed.query.is_none());
		assert!(parsed.auto_load.is_none());
	}

	#[test]
	fn boolish_flags_accept_yes_and_no() {
		let parsed = CliArgs::try_parse_from(["flicks", "--auto-load", "no"]).expect("parses");
		assert_eq!(parsed.auto_load, Some(false));

		let parsed = CliArgs::try_parse_from(["flicks", "-a", "true"]).expect("parses");
		assert_eq!(parsed.auto_load, Some(true));
	}

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}
}
