use anyhow::Result;
use flicks::app::App;
use flicks::cli::parse_cli;
use flicks::{logging, runtime, settings, style};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize()?;

	let app = App::from_config(&resolved)?;
	runtime::run(app)
}
