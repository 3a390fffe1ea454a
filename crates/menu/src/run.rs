//! The render/poll/apply cycle driving interaction to a terminal state.

use log::debug;

use crate::error::MenuError;
use crate::menu::Menu;

/// Abstract classification of one decoded input unit.
///
/// Frontends translate their native events into these; the core never sees
/// raw key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
	/// Printable character appended to the filter, carried in
	/// [`KeyPress::ch`].
	Insert,
	/// Remove the last filter character.
	Backspace,
	/// Remove the trailing filter word.
	DeleteWord,
	/// Clear the whole filter buffer.
	Clear,
	/// Move the cursor one position back.
	Up,
	/// Move the cursor one position forward.
	Down,
	/// Move the cursor back by the display-line hint.
	PageUp,
	/// Move the cursor forward by the display-line hint.
	PageDown,
	/// Jump to the first item of the view.
	Home,
	/// Jump to the last item of the view.
	End,
	/// Toggle the highlighted item in the selection set.
	ToggleSelect,
	/// Select every item in the filtered view.
	SelectAll,
	/// Finish with the current selection.
	Accept,
	/// Finish without output.
	Cancel,
	/// Recognized but unbound input; keeps the loop running.
	Other,
}

/// One polled input unit: a key classification plus the decoded character
/// for text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
	pub class: KeyClass,
	pub ch: Option<char>,
}

impl KeyPress {
	pub fn of(class: KeyClass) -> Self {
		Self { class, ch: None }
	}

	pub fn insert(ch: char) -> Self {
		Self {
			class: KeyClass::Insert,
			ch: Some(ch),
		}
	}
}

/// Outcome of applying one input unit to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunResult {
	/// Keep looping.
	Running,
	/// Terminate; the selection set is authoritative.
	Selected,
	/// Terminate without output.
	Cancelled,
}

/// Capability interface the run loop drives.
///
/// Implementations own the display surface: [`render`](Frontend::render)
/// projects the menu without mutating it, and [`poll_key`](Frontend::poll_key)
/// blocks until exactly one input unit is available. Surface acquisition and
/// release belong to the implementation's constructor and `Drop`, so the
/// terminal is restored on every exit path.
pub trait Frontend {
	fn render(&mut self, menu: &Menu) -> Result<(), MenuError>;
	fn poll_key(&mut self) -> Result<KeyPress, MenuError>;
}

impl Menu {
	/// Apply one polled input unit, returning whether the loop continues.
	pub fn run_with_key(&mut self, key: KeyPress) -> RunResult {
		match key.class {
			KeyClass::Insert => {
				if let Some(ch) = key.ch {
					self.append_filter(ch);
				}
			}
			KeyClass::Backspace => self.pop_filter(),
			KeyClass::DeleteWord => self.delete_filter_word(),
			KeyClass::Clear => self.set_filter(""),
			KeyClass::Up => self.move_cursor(-1, self.wrap()),
			KeyClass::Down => self.move_cursor(1, self.wrap()),
			KeyClass::PageUp => self.move_cursor(-self.page_step(), false),
			KeyClass::PageDown => self.move_cursor(self.page_step(), false),
			KeyClass::Home => self.cursor_to_start(),
			KeyClass::End => self.cursor_to_end(),
			KeyClass::ToggleSelect => self.toggle_select(),
			KeyClass::SelectAll => self.select_all(),
			KeyClass::Accept => {
				self.promote_highlighted();
				return RunResult::Selected;
			}
			KeyClass::Cancel => return RunResult::Cancelled,
			KeyClass::Other => {}
		}
		RunResult::Running
	}

	/// Paging distance: the display-line hint, never less than one step.
	fn page_step(&self) -> isize {
		self.lines().max(1) as isize
	}
}

/// Drive `frontend` until the user accepts or cancels.
///
/// Each iteration renders the current state, blocks for one input unit and
/// applies it; the first non-running result ends the loop.
pub fn run(menu: &mut Menu, frontend: &mut dyn Frontend) -> Result<RunResult, MenuError> {
	loop {
		frontend.render(menu)?;
		let key = frontend.poll_key()?;
		let result = menu.run_with_key(key);
		if result != RunResult::Running {
			debug!("run loop finished: {result:?}");
			return Ok(result);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use super::*;
	use crate::menu::MenuConfig;

	/// Replays a fixed key script and counts rendered frames.
	struct ScriptedFrontend {
		keys: VecDeque<KeyPress>,
		frames: usize,
	}

	impl ScriptedFrontend {
		fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
			Self {
				keys: keys.into_iter().collect(),
				frames: 0,
			}
		}
	}

	impl Frontend for ScriptedFrontend {
		fn render(&mut self, _menu: &Menu) -> Result<(), MenuError> {
			self.frames += 1;
			Ok(())
		}

		fn poll_key(&mut self) -> Result<KeyPress, MenuError> {
			self.keys
				.pop_front()
				.ok_or_else(|| MenuError::BackendInit("script exhausted".to_string()))
		}
	}

	fn menu_with(items: &[&str]) -> Menu {
		let mut menu = Menu::new(MenuConfig::default());
		for text in items {
			menu.push_item((*text).to_string());
		}
		menu
	}

	fn type_text(text: &str) -> Vec<KeyPress> {
		text.chars().map(KeyPress::insert).collect()
	}

	#[test]
	fn accept_immediately_selects_the_first_item() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		let mut frontend = ScriptedFrontend::new([KeyPress::of(KeyClass::Accept)]);

		let result = run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(result, RunResult::Selected);
		assert_eq!(menu.selected_lines(), ["apple"]);
		assert_eq!(frontend.frames, 1);
	}

	#[test]
	fn render_precedes_every_poll() {
		let mut menu = menu_with(&["a", "b"]);
		let mut frontend = ScriptedFrontend::new([
			KeyPress::of(KeyClass::Down),
			KeyPress::of(KeyClass::Other),
			KeyPress::of(KeyClass::Accept),
		]);

		run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(frontend.frames, 3);
	}

	#[test]
	fn cancel_terminates_without_touching_the_selection() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		let mut frontend = ScriptedFrontend::new([
			KeyPress::insert('a'),
			KeyPress::insert('n'),
			KeyPress::of(KeyClass::Cancel),
		]);

		let result = run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(result, RunResult::Cancelled);
		assert_eq!(menu.filter(), "an");
		assert_eq!(menu.filtered_len(), 1);
		assert!(menu.selection_is_empty());
	}

	#[test]
	fn typed_text_with_no_match_falls_back_to_the_filter() {
		let mut menu = menu_with(&[]);
		let mut keys = type_text("newthing");
		keys.push(KeyPress::of(KeyClass::Accept));
		let mut frontend = ScriptedFrontend::new(keys);

		let result = run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(result, RunResult::Selected);
		assert_eq!(menu.selected_lines(), ["newthing"]);
	}

	#[test]
	fn explicit_selection_is_not_overridden_by_accept() {
		let mut menu = menu_with(&["apple", "banana"]);
		let mut frontend = ScriptedFrontend::new([
			KeyPress::of(KeyClass::Down),
			KeyPress::of(KeyClass::ToggleSelect),
			KeyPress::of(KeyClass::Up),
			KeyPress::of(KeyClass::ToggleSelect),
			KeyPress::of(KeyClass::Accept),
		]);

		let result = run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(result, RunResult::Selected);
		assert_eq!(menu.selected_lines(), ["banana", "apple"]);
	}

	#[test]
	fn editing_keys_route_through_the_filter() {
		let mut menu = menu_with(&["alpha", "beta"]);
		let mut keys = type_text("alx");
		keys.extend([
			KeyPress::of(KeyClass::Backspace),
			KeyPress::of(KeyClass::Accept),
		]);
		let mut frontend = ScriptedFrontend::new(keys);

		run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(menu.filter(), "al");
		assert_eq!(menu.selected_lines(), ["alpha"]);
	}

	#[test]
	fn clear_restores_the_full_view() {
		let mut menu = menu_with(&["one", "two"]);
		let mut keys = type_text("nomatch");
		keys.extend([KeyPress::of(KeyClass::Clear), KeyPress::of(KeyClass::Accept)]);
		let mut frontend = ScriptedFrontend::new(keys);

		run(&mut menu, &mut frontend).expect("loop runs");
		assert_eq!(menu.selected_lines(), ["one"]);
	}

	#[test]
	fn paging_moves_by_the_line_hint_and_clamps() {
		let mut menu = Menu::new(MenuConfig {
			lines: 3,
			wrap: true,
			..MenuConfig::default()
		});
		for text in ["a", "b", "c", "d", "e"] {
			menu.push_item(text.to_string());
		}

		menu.run_with_key(KeyPress::of(KeyClass::PageDown));
		assert_eq!(menu.cursor(), Some(3));
		menu.run_with_key(KeyPress::of(KeyClass::PageDown));
		assert_eq!(menu.cursor(), Some(4));
		menu.run_with_key(KeyPress::of(KeyClass::Home));
		assert_eq!(menu.cursor(), Some(0));
		menu.run_with_key(KeyPress::of(KeyClass::End));
		assert_eq!(menu.cursor(), Some(4));
	}

	#[test]
	fn frontend_errors_propagate() {
		let mut menu = menu_with(&["a"]);
		let mut frontend = ScriptedFrontend::new([]);

		let err = run(&mut menu, &mut frontend).expect_err("script exhausted");
		assert!(matches!(err, MenuError::BackendInit(_)));
	}
}
