use crate::style::Theme;

/// Fully validated configuration consumed by the application.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// OMDb access key sent with every request.
	pub api_key: String,
	/// Search endpoint.
	pub base_url: String,
	/// Name of the active theme.
	pub theme_name: String,
	/// Resolved theme styles.
	pub theme: Theme,
	/// Query submitted automatically on startup.
	pub initial_query: String,
	/// Whether the passive pagination trigger starts enabled.
	pub auto_load: bool,
}

impl ResolvedConfig {
	/// Print a human-readable summary of the resolved settings.
	///
	/// The access key is masked; only enough is shown to tell keys apart.
	pub fn print_summary(&self) {
		println!("base url:      {}", self.base_url);
		println!("api key:       {}", mask_key(&self.api_key));
		println!("theme:         {}", self.theme_name);
		println!("initial query: {}", self.initial_query);
		println!("auto-load:     {}", self.auto_load);
	}
}

fn mask_key(key: &str) -> String {
	let chars: Vec<char> = key.chars().collect();
	if chars.len() <= 4 {
		return "*".repeat(chars.len());
	}
	let suffix: String = chars[chars.len() - 4..].iter().collect();
	format!("{}{}", "*".repeat(chars.len() - 4), suffix)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_are_masked_down_to_a_suffix() {
		assert_eq!(mask_key("abcd1234"), "****1234");
		assert_eq!(mask_key("ab"), "**");
	}
}
