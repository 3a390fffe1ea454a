use std::io;

use anyhow::{Context, Result};
use limn_menu::{Menu, MenuConfig, RunResult, read_items};
use limn_tui::TermFrontend;
use log::debug;

use crate::settings::ResolvedConfig;

/// Result of one interactive picking session.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PickOutcome {
	pub(crate) accepted: bool,
	pub(crate) lines: Vec<String>,
}

/// Coordinates menu construction, stdin ingestion and the interactive loop.
pub(crate) struct PickWorkflow {
	menu: Menu,
	initial_query: String,
	initial_index: Option<usize>,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			prompt,
			lines,
			wrap,
			filter_mode,
			initial_query,
			initial_index,
		} = config;

		let menu = Menu::new(MenuConfig {
			title: prompt,
			filter_mode,
			wrap,
			lines,
		});

		Self {
			menu,
			initial_query,
			initial_index,
		}
	}

	/// Ingest stdin, run the interactive loop, and package the outcome.
	///
	/// The terminal is acquired only after ingestion finishes and is
	/// restored before any output line is written.
	pub(crate) fn run(mut self) -> Result<PickOutcome> {
		let stdin = io::stdin();
		let ingested = read_items(&mut self.menu, stdin.lock());
		debug!("{ingested} items ingested from stdin");

		if let Some(index) = self.initial_index {
			self.menu.set_highlighted_index(index);
		}
		if !self.initial_query.is_empty() {
			self.menu.set_filter(&self.initial_query);
		}

		let status = {
			let mut frontend = TermFrontend::new(self.menu.lines())
				.context("failed to acquire the terminal")?;
			limn_menu::run(&mut self.menu, &mut frontend)?
		};

		let accepted = status == RunResult::Selected;
		let lines = if accepted {
			self.menu.selected_lines()
		} else {
			Vec::new()
		};
		Ok(PickOutcome { accepted, lines })
	}
}
