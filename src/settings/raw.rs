use limn_menu::FilterMode;
use serde::Deserialize;

use super::{MAX_LINES, ResolvedConfig};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	menu: MenuSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MenuSection {
	prompt: Option<String>,
	lines: Option<u16>,
	wrap: Option<bool>,
	ignorecase: Option<bool>,
}

impl RawSettings {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.ignorecase {
			self.menu.ignorecase = Some(true);
		}
		if cli.wrap {
			self.menu.wrap = Some(true);
		}
		if let Some(lines) = cli.list {
			self.menu.lines = Some(lines);
		}
		if let Some(prompt) = &cli.prompt {
			self.menu.prompt = Some(prompt.clone());
		}
	}

	/// Fill defaults and clamp into the [`ResolvedConfig`] the workflow
	/// consumes. The initial query and index never come from files; they
	/// describe one invocation, not a preference.
	pub(super) fn resolve(self, cli: &CliArgs) -> ResolvedConfig {
		let MenuSection {
			prompt,
			lines,
			wrap,
			ignorecase,
		} = self.menu;

		let filter_mode = if ignorecase.unwrap_or(false) {
			FilterMode::CaseInsensitive
		} else {
			FilterMode::CaseSensitive
		};

		ResolvedConfig {
			prompt: prompt.unwrap_or_else(|| "limn".to_string()),
			lines: lines.unwrap_or(0).min(MAX_LINES),
			wrap: wrap.unwrap_or(false),
			filter_mode,
			initial_query: cli.query.clone().unwrap_or_default(),
			initial_index: cli.index,
		}
	}
}
