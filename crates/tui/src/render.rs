//! Projection of menu state onto the inline viewport.
//!
//! The first row carries the prompt and filter buffer; with a line hint the
//! filtered view is listed vertically below it, otherwise items share the
//! input row horizontally. Both layouts window their items so the
//! highlighted one is always visible.

use limn_menu::Menu;
use ratatui::Frame;
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub(crate) fn draw(frame: &mut Frame, menu: &Menu) {
	let area = frame.area();
	if area.width == 0 || area.height == 0 {
		return;
	}

	let lines = if menu.lines() == 0 {
		vec![horizontal_line(menu, area.width as usize)]
	} else {
		let mut rows = vec![input_line(menu)];
		rows.extend(vertical_lines(menu, area.height.saturating_sub(1) as usize));
		rows
	};
	frame.render_widget(Paragraph::new(lines), area);

	let cursor_x = input_width(menu).min(area.width.saturating_sub(1) as usize) as u16;
	frame.set_cursor_position(Position::new(area.x + cursor_x, area.y));
}

fn prompt_style() -> Style {
	Style::default().add_modifier(Modifier::BOLD)
}

fn highlight_style() -> Style {
	Style::default().add_modifier(Modifier::REVERSED)
}

fn selected_style() -> Style {
	Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Display width of the prompt plus filter, which is where the terminal
/// cursor belongs.
fn input_width(menu: &Menu) -> usize {
	menu.title().width() + 1 + menu.filter().width()
}

fn input_line(menu: &Menu) -> Line<'_> {
	Line::from(vec![
		Span::styled(menu.title(), prompt_style()),
		Span::raw(" "),
		Span::raw(menu.filter()),
	])
}

fn item_style(menu: &Menu, pos: usize) -> Style {
	let highlighted = menu.cursor() == Some(pos);
	let selected = menu
		.filtered_items()
		.nth(pos)
		.is_some_and(|item| menu.is_selected(item.id()));
	if highlighted {
		highlight_style()
	} else if selected {
		selected_style()
	} else {
		Style::default()
	}
}

/// Single-row layout: prompt, filter, then a width-paged slice of the view.
fn horizontal_line(menu: &Menu, width: usize) -> Line<'_> {
	let mut spans = vec![
		Span::styled(menu.title(), prompt_style()),
		Span::raw(" "),
		Span::raw(menu.filter()),
		Span::raw(" "),
	];

	let avail = width.saturating_sub(input_width(menu) + 1);
	let (start, end) = horizontal_window(menu, avail);
	for (pos, item) in menu.filtered_items().enumerate().take(end).skip(start) {
		spans.push(Span::styled(item.text(), item_style(menu, pos)));
		spans.push(Span::raw("  "));
	}

	Line::from(spans)
}

/// Width-based paging: advance whole pages until the cursor's page is
/// reached, so the highlighted item never scrolls out of view.
fn horizontal_window(menu: &Menu, avail: usize) -> (usize, usize) {
	let len = menu.filtered_len();
	let cursor = menu.cursor().unwrap_or(0);
	let widths: Vec<usize> = menu
		.filtered_items()
		.map(|item| item.text().width() + 2)
		.collect();

	let mut start = 0;
	loop {
		let mut used = 0;
		let mut end = start;
		while end < len {
			let item_width = widths[end];
			if used + item_width > avail && end > start {
				break;
			}
			used += item_width;
			end += 1;
		}
		if cursor < end || end >= len {
			return (start, end);
		}
		start = end;
	}
}

/// Vertical layout: one item per row, paged by the viewport height.
fn vertical_lines(menu: &Menu, rows: usize) -> Vec<Line<'_>> {
	if rows == 0 {
		return Vec::new();
	}
	let len = menu.filtered_len();
	let cursor = menu.cursor().unwrap_or(0);
	let start = (cursor / rows) * rows;
	let end = (start + rows).min(len);

	menu.filtered_items()
		.enumerate()
		.take(end)
		.skip(start)
		.map(|(pos, item)| Line::styled(item.text(), item_style(menu, pos)))
		.collect()
}
