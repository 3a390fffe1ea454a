//! Aggregate state for the interactive picker.
//!
//! The [`Menu`] owns the ingested items, the user-edited filter buffer, the
//! filtered view derived from it, the highlighted cursor and the selection
//! set. Storage order is insertion order and never changes; filtering only
//! recomputes the view.

use crate::filter::{FilterMode, FilterPredicate, SubstringFilter};
use crate::item::{Item, ItemId};

/// Configuration consumed when creating a [`Menu`].
#[derive(Clone, Debug)]
pub struct MenuConfig {
	/// Prompt text shown by the frontend; opaque to the core.
	pub title: String,
	/// Matching rule for the built-in substring predicate.
	pub filter_mode: FilterMode,
	/// Whether cursor motion cycles past either end of the view.
	pub wrap: bool,
	/// Display-line-count hint for vertical layouts; `0` means a single
	/// horizontal line. Passed through to the frontend and used as the
	/// paging step.
	pub lines: u16,
}

impl Default for MenuConfig {
	fn default() -> Self {
		Self {
			title: "limn".to_string(),
			filter_mode: FilterMode::default(),
			wrap: false,
			lines: 0,
		}
	}
}

/// Candidate items plus everything the user mutates while narrowing them.
///
/// Invariant: the cursor is `None` exactly when the filtered view is empty,
/// and otherwise indexes a valid view position. Every mutation re-establishes
/// this before returning.
pub struct Menu {
	items: Vec<Item>,
	next_id: u64,
	filter: String,
	predicate: Box<dyn FilterPredicate>,
	filtered: Vec<usize>,
	cursor: Option<usize>,
	selection: Vec<ItemId>,
	title: String,
	wrap: bool,
	lines: u16,
}

impl Menu {
	/// Create a menu with the built-in substring predicate for the
	/// configured filter mode.
	pub fn new(config: MenuConfig) -> Self {
		let predicate = SubstringFilter::new(config.filter_mode);
		Self::with_predicate(config, Box::new(predicate))
	}

	/// Create a menu with a caller-supplied matching predicate.
	pub fn with_predicate(config: MenuConfig, predicate: Box<dyn FilterPredicate>) -> Self {
		Self {
			items: Vec::new(),
			next_id: 0,
			filter: String::new(),
			predicate,
			filtered: Vec::new(),
			cursor: None,
			selection: Vec::new(),
			title: config.title,
			wrap: config.wrap,
			lines: config.lines,
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn wrap(&self) -> bool {
		self.wrap
	}

	pub fn lines(&self) -> u16 {
		self.lines
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn item_count(&self) -> usize {
		self.items.len()
	}

	/// Number of items in the current filtered view.
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Cursor position within the filtered view, `None` when it is empty.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// Items of the filtered view in storage order.
	pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
		self.filtered.iter().map(|&index| &self.items[index])
	}

	pub fn item(&self, id: ItemId) -> Option<&Item> {
		self.items.iter().find(|item| item.id() == id)
	}

	pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
		self.items.iter_mut().find(|item| item.id() == id)
	}

	pub fn is_selected(&self, id: ItemId) -> bool {
		self.selection.contains(&id)
	}

	/// Register one item at the end of storage, extending the filtered view
	/// in place when the item matches the active filter.
	pub fn push_item(&mut self, text: String) -> ItemId {
		let id = ItemId(self.next_id);
		self.next_id += 1;

		let index = self.items.len();
		if self.predicate.matches(&text, &self.filter) {
			self.filtered.push(index);
		}
		self.items.push(Item::new(id, text));
		self.ensure_cursor();
		id
	}

	/// Replace the filter buffer and recompute the filtered view.
	///
	/// Applying the currently active text again is a no-op, so an already
	/// valid cursor never moves.
	pub fn set_filter(&mut self, text: &str) {
		if text == self.filter {
			return;
		}
		self.filter.clear();
		self.filter.push_str(text);
		self.refresh_view();
	}

	pub(crate) fn append_filter(&mut self, ch: char) {
		let mut next = self.filter.clone();
		next.push(ch);
		self.set_filter(&next);
	}

	pub(crate) fn pop_filter(&mut self) {
		let mut next = self.filter.clone();
		next.pop();
		self.set_filter(&next);
	}

	/// Drop trailing whitespace, then the trailing word.
	pub(crate) fn delete_filter_word(&mut self) {
		let head = self.filter.trim_end();
		let cut = head
			.char_indices()
			.rev()
			.find(|(_, ch)| ch.is_whitespace())
			.map(|(pos, ch)| pos + ch.len_utf8())
			.unwrap_or(0);
		let next = self.filter[..cut].to_string();
		self.set_filter(&next);
	}

	/// Move the cursor by `delta` view positions. With `wrap`, motion past
	/// either end cycles to the opposite end; without, it clamps at the
	/// boundary.
	pub fn move_cursor(&mut self, delta: isize, wrap: bool) {
		let Some(pos) = self.cursor else {
			return;
		};
		let len = self.filtered.len() as isize;
		if len == 0 {
			return;
		}
		let target = pos as isize + delta;
		let next = if wrap {
			target.rem_euclid(len)
		} else {
			target.clamp(0, len - 1)
		};
		self.cursor = Some(next as usize);
	}

	pub fn cursor_to_start(&mut self) {
		if !self.filtered.is_empty() {
			self.cursor = Some(0);
		}
	}

	pub fn cursor_to_end(&mut self) {
		if !self.filtered.is_empty() {
			self.cursor = Some(self.filtered.len() - 1);
		}
	}

	/// Pre-highlight the item at `index` in the unfiltered sequence.
	///
	/// Out-of-range indices and items hidden by the active filter are
	/// silently ignored.
	pub fn set_highlighted_index(&mut self, index: usize) {
		if index >= self.items.len() {
			return;
		}
		if let Some(pos) = self.filtered.iter().position(|&stored| stored == index) {
			self.cursor = Some(pos);
		}
	}

	/// The item under the cursor, `None` when the view is empty.
	pub fn highlighted_item(&self) -> Option<&Item> {
		let pos = self.cursor?;
		self.filtered.get(pos).map(|&index| &self.items[index])
	}

	/// Add the highlighted item to the selection set, or remove it when it
	/// is already selected.
	pub fn toggle_select(&mut self) {
		let Some(id) = self.highlighted_item().map(|item| item.id()) else {
			return;
		};
		if let Some(at) = self.selection.iter().position(|&selected| selected == id) {
			self.selection.remove(at);
		} else {
			self.selection.push(id);
		}
	}

	/// Select every item in the filtered view, keeping the order in which
	/// items were originally selected and appending the rest in view order.
	pub fn select_all(&mut self) {
		let ids: Vec<ItemId> = self.filtered_items().map(|item| item.id()).collect();
		for id in ids {
			if !self.selection.contains(&id) {
				self.selection.push(id);
			}
		}
	}

	pub fn selection_is_empty(&self) -> bool {
		self.selection.is_empty()
	}

	/// Selected items in selection order. Dangling ids cannot occur; items
	/// live as long as the menu.
	pub fn selected_items(&self) -> impl Iterator<Item = &Item> + '_ {
		self.selection.iter().filter_map(|&id| self.item(id))
	}

	/// Move the highlighted item into an empty selection set, so accepting
	/// without an explicit selection yields exactly one result.
	pub(crate) fn promote_highlighted(&mut self) {
		if !self.selection.is_empty() {
			return;
		}
		if let Some(id) = self.highlighted_item().map(|item| item.id()) {
			self.selection.push(id);
		}
	}

	/// Output lines for a completed selection: the selected texts in
	/// selection order, or the raw filter text as a single fallback line
	/// when nothing was selected but the filter is non-empty.
	pub fn selected_lines(&self) -> Vec<String> {
		let lines: Vec<String> = self
			.selected_items()
			.map(|item| item.text().to_string())
			.collect();
		if lines.is_empty() && !self.filter.is_empty() {
			return vec![self.filter.clone()];
		}
		lines
	}

	fn refresh_view(&mut self) {
		self.filtered.clear();
		for (index, item) in self.items.iter().enumerate() {
			if self.predicate.matches(item.text(), &self.filter) {
				self.filtered.push(index);
			}
		}
		self.ensure_cursor();
	}

	/// Re-establish the cursor invariant after the view changed shape.
	fn ensure_cursor(&mut self) {
		self.cursor = match (self.cursor, self.filtered.len()) {
			(_, 0) => None,
			(None, _) => Some(0),
			(Some(pos), len) => Some(pos.min(len - 1)),
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn menu_with(items: &[&str]) -> Menu {
		let mut menu = Menu::new(MenuConfig::default());
		for text in items {
			menu.push_item((*text).to_string());
		}
		menu
	}

	#[test]
	fn cursor_starts_at_first_item() {
		let menu = menu_with(&["apple", "banana", "cherry"]);
		assert_eq!(menu.cursor(), Some(0));
		assert_eq!(menu.highlighted_item().expect("non-empty view").text(), "apple");
	}

	#[test]
	fn empty_menu_has_no_cursor() {
		let menu = menu_with(&[]);
		assert_eq!(menu.cursor(), None);
		assert!(menu.highlighted_item().is_none());
	}

	#[test]
	fn set_filter_narrows_the_view() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		menu.set_filter("an");
		assert_eq!(menu.filtered_len(), 1);
		assert_eq!(menu.highlighted_item().expect("one match").text(), "banana");
	}

	#[test]
	fn set_filter_is_idempotent() {
		let mut menu = menu_with(&["apple", "apricot", "banana"]);
		menu.set_filter("ap");
		menu.move_cursor(1, false);
		let before = menu.cursor();

		menu.set_filter("ap");
		assert_eq!(menu.cursor(), before);
		assert_eq!(menu.filtered_len(), 2);
	}

	#[test]
	fn shrinking_refilter_clamps_the_cursor() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		menu.move_cursor(2, false);
		assert_eq!(menu.cursor(), Some(2));

		menu.set_filter("a");
		assert_eq!(menu.filtered_len(), 2);
		assert_eq!(menu.cursor(), Some(1));
	}

	#[test]
	fn unmatchable_filter_empties_cursor_without_error() {
		let mut menu = menu_with(&["apple"]);
		menu.set_filter("definitely not in there");
		assert_eq!(menu.filtered_len(), 0);
		assert_eq!(menu.cursor(), None);

		menu.set_filter("");
		assert_eq!(menu.cursor(), Some(0));
	}

	#[test]
	fn wrap_cycles_and_clamp_stops() {
		let mut menu = menu_with(&["a", "b", "c"]);
		menu.cursor_to_end();

		menu.move_cursor(1, true);
		assert_eq!(menu.cursor(), Some(0));
		menu.move_cursor(-1, true);
		assert_eq!(menu.cursor(), Some(2));

		menu.move_cursor(1, false);
		assert_eq!(menu.cursor(), Some(2));
		menu.move_cursor(-10, false);
		assert_eq!(menu.cursor(), Some(0));
	}

	#[test]
	fn initial_index_is_validated_against_storage() {
		let mut menu = menu_with(&["a", "b", "c"]);
		menu.set_highlighted_index(2);
		assert_eq!(menu.cursor(), Some(2));

		menu.set_highlighted_index(99);
		assert_eq!(menu.cursor(), Some(2));
	}

	#[test]
	fn selection_survives_refiltering() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		menu.move_cursor(1, false);
		menu.toggle_select();

		menu.set_filter("cherry");
		menu.set_filter("");
		let selected: Vec<&str> = menu.selected_items().map(Item::text).collect();
		assert_eq!(selected, ["banana"]);

		menu.move_cursor(1, false);
		menu.toggle_select();
		menu.toggle_select();
		let selected: Vec<&str> = menu.selected_items().map(Item::text).collect();
		assert_eq!(selected, ["banana"]);
	}

	#[test]
	fn identical_text_stays_distinct() {
		let mut menu = menu_with(&["dup", "dup"]);
		menu.toggle_select();
		menu.move_cursor(1, false);
		menu.toggle_select();
		assert_eq!(menu.selected_items().count(), 2);
	}

	#[test]
	fn emission_follows_selection_order() {
		let mut menu = menu_with(&["apple", "banana", "cherry"]);
		menu.cursor_to_end();
		menu.toggle_select();
		menu.cursor_to_start();
		menu.toggle_select();

		assert_eq!(menu.selected_lines(), ["cherry", "apple"]);
	}

	#[test]
	fn select_all_covers_the_filtered_view() {
		let mut menu = menu_with(&["apple", "apricot", "banana"]);
		menu.set_filter("ap");
		menu.select_all();

		menu.set_filter("");
		assert_eq!(menu.selected_lines(), ["apple", "apricot"]);
	}

	#[test]
	fn fallback_emits_the_raw_filter_text() {
		let mut menu = menu_with(&[]);
		menu.set_filter("newthing");
		assert_eq!(menu.selected_lines(), ["newthing"]);
	}

	#[test]
	fn no_selection_and_no_filter_emits_nothing() {
		let menu = menu_with(&[]);
		assert!(menu.selected_lines().is_empty());
	}

	#[test]
	fn word_deletion_edits_through_the_filter_path() {
		let mut menu = menu_with(&["one two", "one"]);
		menu.set_filter("one two");
		assert_eq!(menu.filtered_len(), 1);

		menu.delete_filter_word();
		assert_eq!(menu.filter(), "one ");
		assert_eq!(menu.filtered_len(), 1);

		menu.delete_filter_word();
		assert_eq!(menu.filter(), "");
		assert_eq!(menu.filtered_len(), 2);
	}
}
