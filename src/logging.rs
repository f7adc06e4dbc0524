//! File-backed logging setup.
//!
//! Stdout and stderr belong to the terminal UI, so log lines go to a file
//! under the data directory instead. A broken or read-only data directory
//! disables logging rather than aborting startup.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable controlling the log filter, e.g. `flicks=debug`.
pub const LOG_FILTER_ENV: &str = "FLICKS_LOG";

const LOG_FILE_NAME: &str = "flicks.log";

/// Install the global tracing subscriber writing to the application log file.
pub fn initialize() -> Result<()> {
	let Ok(data_dir) = app_dirs::get_data_dir() else {
		return Ok(());
	};
	if fs::create_dir_all(&data_dir).is_err() {
		return Ok(());
	}

	let Ok(file) = OpenOptions::new()
		.create(true)
		.append(true)
		.open(data_dir.join(LOG_FILE_NAME))
	else {
		return Ok(());
	};

	let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
		.unwrap_or_else(|_| EnvFilter::new("flicks=info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

	Ok(())
}
