//! Configuration loading and resolution utilities.
//!
//! Values are layered from default configuration files, explicit `--config`
//! files, `FLICKS__` environment variables, and finally CLI overrides.
//! `load` is the primary entry point and returns a [`ResolvedConfig`] that is
//! used by the application.

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;

pub use resolved::ResolvedConfig;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = sources::build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}
