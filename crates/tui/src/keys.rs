//! Translation from terminal key events to the core's abstract keys.

use limn_menu::{KeyClass, KeyPress};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Classify one terminal key event into the [`KeyPress`] the run loop
/// understands. Left/Right mirror Up/Down so the horizontal layout stays
/// navigable with the arrows that match its direction.
pub(crate) fn classify(key: KeyEvent) -> KeyPress {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

	match key.code {
		KeyCode::Esc => KeyPress::of(KeyClass::Cancel),
		KeyCode::Char('c' | 'g') if ctrl => KeyPress::of(KeyClass::Cancel),
		KeyCode::Enter => KeyPress::of(KeyClass::Accept),

		KeyCode::Up | KeyCode::Left => KeyPress::of(KeyClass::Up),
		KeyCode::Char('p') if ctrl => KeyPress::of(KeyClass::Up),
		KeyCode::Down | KeyCode::Right => KeyPress::of(KeyClass::Down),
		KeyCode::Char('n') if ctrl => KeyPress::of(KeyClass::Down),
		KeyCode::PageUp => KeyPress::of(KeyClass::PageUp),
		KeyCode::PageDown => KeyPress::of(KeyClass::PageDown),
		KeyCode::Home => KeyPress::of(KeyClass::Home),
		KeyCode::End => KeyPress::of(KeyClass::End),

		KeyCode::Backspace => KeyPress::of(KeyClass::Backspace),
		KeyCode::Char('h') if ctrl => KeyPress::of(KeyClass::Backspace),
		KeyCode::Char('u') if ctrl => KeyPress::of(KeyClass::Clear),
		KeyCode::Char('w') if ctrl => KeyPress::of(KeyClass::DeleteWord),

		KeyCode::Char(' ') if ctrl => KeyPress::of(KeyClass::ToggleSelect),
		KeyCode::Char('a') if ctrl => KeyPress::of(KeyClass::SelectAll),

		KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) && !ctrl => {
			KeyPress::insert(ch)
		}
		_ => KeyPress::of(KeyClass::Other),
	}
}
