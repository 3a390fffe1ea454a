use std::any::Any;
use std::fmt;

/// Stable identity of an [`Item`] within its owning [`Menu`](crate::Menu).
///
/// Two items with identical text remain distinct entries; selections are
/// keyed by this id so refiltering never loses or duplicates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) u64);

/// One selectable text record ingested from input.
///
/// The text is fixed at creation; callers may attach opaque user data that
/// travels with the item but is never inspected by the core.
pub struct Item {
	id: ItemId,
	text: String,
	userdata: Option<Box<dyn Any>>,
}

impl Item {
	pub(crate) fn new(id: ItemId, text: String) -> Self {
		Self {
			id,
			text,
			userdata: None,
		}
	}

	pub fn id(&self) -> ItemId {
		self.id
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Attach opaque data to this item, replacing any previous value.
	pub fn set_userdata(&mut self, data: Box<dyn Any>) {
		self.userdata = Some(data);
	}

	pub fn userdata(&self) -> Option<&dyn Any> {
		self.userdata.as_deref()
	}
}

impl fmt::Debug for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Item")
			.field("id", &self.id)
			.field("text", &self.text)
			.finish_non_exhaustive()
	}
}
