//! Layered configuration: default file, explicit files, environment, CLI.
//!
//! Mirrors the two-step shape of the config pipeline: a raw deserialized
//! mirror of the file format first, CLI overrides applied on top, then
//! validation into the [`ResolvedConfig`] the workflow consumes.

mod raw;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use limn_menu::FilterMode;
use std::path::PathBuf;

use crate::cli::CliArgs;
use raw::RawSettings;

/// Ceiling for the vertical list hint; the terminal owns the real height.
pub(crate) const MAX_LINES: u16 = 128;

/// Fully validated configuration consumed by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
	pub(crate) prompt: String,
	pub(crate) lines: u16,
	pub(crate) wrap: bool,
	pub(crate) filter_mode: FilterMode,
	pub(crate) initial_query: String,
	pub(crate) initial_index: Option<usize>,
}

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let sources = build_sources(cli)?;
	let mut raw: RawSettings = sources
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve(cli))
}

fn build_sources(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config
		&& let Some(path) = default_config_path()
	{
		builder = builder.add_source(File::from(path).required(false));
	}
	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}
	builder = builder.add_source(
		Environment::with_prefix("LIMN")
			.separator("__")
			.try_parsing(true),
	);

	builder
		.build()
		.context("failed to load configuration sources")
}

fn default_config_path() -> Option<PathBuf> {
	ProjectDirs::from("", "", "limn").map(|dirs| dirs.config_dir().join("limn.toml"))
}
