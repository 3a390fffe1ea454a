//! Streaming item ingestion from a newline-delimited byte source.

use std::io::BufRead;

use log::debug;

use crate::menu::Menu;

/// Read newline-delimited items from `reader` into `menu`.
///
/// Each non-empty line is registered as soon as it is parsed; a trailing
/// fragment without a terminator still counts as a final item. Empty lines
/// produce nothing. The stream length is never assumed up front, and a read
/// failure ends ingestion early while keeping every item registered so far.
///
/// Returns the number of items registered.
pub fn read_items<R: BufRead>(menu: &mut Menu, mut reader: R) -> usize {
	let mut buffer = Vec::new();
	let mut count = 0usize;

	loop {
		buffer.clear();
		match reader.read_until(b'\n', &mut buffer) {
			Ok(0) => break,
			Ok(_) => {
				if buffer.last() == Some(&b'\n') {
					buffer.pop();
				}
				if buffer.is_empty() {
					continue;
				}
				let text = String::from_utf8_lossy(&buffer).into_owned();
				menu.push_item(text);
				count += 1;
			}
			Err(err) => {
				debug!("ingestion stopped early after {count} items: {err}");
				break;
			}
		}
	}

	debug!("ingested {count} items");
	count
}
