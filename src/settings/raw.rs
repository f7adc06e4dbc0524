use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;
use crate::cli::CliArgs;
use crate::style::theme;

use super::resolved::ResolvedConfig;

const DEFAULT_INITIAL_QUERY: &str = "Marvel";
const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	/// OMDb access key. Required; there is no anonymous tier.
	key: Option<String>,
	/// Endpoint override, used as a seam for tests and proxies.
	base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	auto_load: Option<bool>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = &cli.api_key {
			self.api.key = Some(key.clone());
		}
		if let Some(query) = &cli.query {
			self.ui.initial_query = Some(query.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(auto_load) = cli.auto_load {
			self.ui.auto_load = Some(auto_load);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating
	/// and filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let api_key = self
			.api
			.key
			.filter(|key| !key.trim().is_empty())
			.ok_or_else(|| {
				anyhow!(
					"no OMDb API key configured; set OMDB_API_KEY, api.key in a config file, or --api-key"
				)
			})?;

		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = theme::by_name(&theme_name)
			.ok_or_else(|| anyhow!("unknown theme {theme_name:?}; try --list-themes"))?;

		Ok(ResolvedConfig {
			api_key,
			base_url: self
				.api
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			theme_name,
			theme,
			initial_query: self
				.ui
				.initial_query
				.unwrap_or_else(|| DEFAULT_INITIAL_QUERY.to_string()),
			auto_load: self.ui.auto_load.unwrap_or(true),
		})
	}
}
