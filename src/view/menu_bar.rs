//! The menu bar widget.
//!
//! Renders the whole interaction surface: prompt, input field with cursor,
//! and the visible window of matched items. Horizontal mode is a single row
//! with `<` / `>` page markers; vertical mode stacks the input row above a
//! fixed number of item rows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::ItemStore;
use crate::state::{LayoutBudget, MenuState};
use crate::view::styles::MenuStyles;

/// Cells reserved for each page marker in the horizontal layout.
pub const MARKER_WIDTH: u16 = 2;

/// Padding added around every item (one cell each side).
const ITEM_PADDING: u16 = 2;

// ===== Layout measurement =====

/// Rendered width of a text in terminal cells, padding included.
///
/// This is the `MeasureFn` handed to the pagination budget; the widget uses
/// the same measure so what pagination admits is exactly what fits.
pub fn cell_width(text: &str) -> u16 {
    let cells = UnicodeWidthStr::width(text).min(u16::MAX as usize - ITEM_PADDING as usize);
    cells as u16 + ITEM_PADDING
}

/// Build the layout budget for a terminal of the given width.
///
/// `lines > 0` selects the vertical layout. Horizontal chrome reserves the
/// prompt (capped at a fifth of the width), an input field sized for the
/// longest candidate (capped at a third), and both page markers.
pub fn layout_budget(width: u16, lines: u16, prompt: &str, store: &ItemStore) -> LayoutBudget {
    if lines > 0 {
        return LayoutBudget::Count { lines };
    }
    let chrome = prompt_width(prompt, width) + input_width(store, width) + 2 * MARKER_WIDTH;
    LayoutBudget::Extent {
        total: width,
        chrome,
        measure: cell_width,
    }
}

fn prompt_width(prompt: &str, total: u16) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        cell_width(prompt).min(total / 5)
    }
}

fn input_width(store: &ItemStore, total: u16) -> u16 {
    store
        .longest_text()
        .map(cell_width)
        .unwrap_or(ITEM_PADDING)
        .min(total / 3)
}

// ===== Text fitting =====

/// Shorten `text` to at most `max` cells, replacing the clipped tail
/// with `..`.
fn shorten(text: &str, max: u16) -> String {
    let max = max as usize;
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    if max <= 2 {
        return ".".repeat(max);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max - 2 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("..");
    out
}

/// Render `text` into a cell run of exactly `width` cells: one leading
/// space, the (possibly shortened) text, space padding to the end.
fn fit(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    let shortened = shorten(text, width.saturating_sub(ITEM_PADDING));
    let mut out = String::from(" ");
    out.push_str(&shortened);
    let mut used = 1 + UnicodeWidthStr::width(shortened.as_str());
    while used < width as usize {
        out.push(' ');
        used += 1;
    }
    out
}

/// Input field spans: text before the cursor, the cursor cell (inverted),
/// text after, padded out to `field` cells.
///
/// When the pattern overflows the field, the head is clipped so the cursor
/// stays visible.
fn input_spans(
    pattern: &str,
    cursor: usize,
    field: u16,
    styles: &MenuStyles,
) -> Vec<Span<'static>> {
    let field = field as usize;
    if field == 0 {
        return Vec::new();
    }
    let (cursor_cell, after) = match pattern[cursor..].chars().next() {
        Some(c) => (c.to_string(), &pattern[cursor + c.len_utf8()..]),
        None => (" ".to_string(), ""),
    };
    let cursor_w = UnicodeWidthStr::width(cursor_cell.as_str()).max(1);

    let mut head = pattern[..cursor].to_string();
    while !head.is_empty() && UnicodeWidthStr::width(head.as_str()) + cursor_w > field {
        let mut chars = head.chars();
        chars.next();
        head = chars.collect();
    }

    let mut used = UnicodeWidthStr::width(head.as_str()) + cursor_w;
    let mut tail = String::new();
    for c in after.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > field {
            break;
        }
        tail.push(c);
        used += w;
    }
    while used < field {
        tail.push(' ');
        used += 1;
    }

    vec![
        Span::styled(head, styles.normal()),
        Span::styled(cursor_cell, styles.cursor()),
        Span::styled(tail, styles.normal()),
    ]
}

// ===== MenuBar =====

/// Widget rendering the menu from a [`MenuState`] snapshot.
pub struct MenuBar<'a> {
    state: &'a MenuState,
    styles: &'a MenuStyles,
}

impl<'a> MenuBar<'a> {
    /// Wrap the state and styles for one render pass.
    pub fn new(state: &'a MenuState, styles: &'a MenuStyles) -> Self {
        Self { state, styles }
    }

    fn render_horizontal(&self, area: Rect, buf: &mut Buffer) {
        let total = area.width;
        let mut spans = Vec::new();

        let prompt_w = prompt_width(self.state.prompt(), total);
        if prompt_w > 0 {
            spans.push(Span::styled(
                fit(self.state.prompt(), prompt_w),
                self.styles.selected(),
            ));
        }

        // With no matches the input field claims the rest of the row.
        let field = if self.state.match_count() > 0 {
            input_width(self.state.store(), total)
        } else {
            total.saturating_sub(prompt_w)
        };
        spans.extend(input_spans(
            self.state.pattern(),
            self.state.cursor(),
            field,
            self.styles,
        ));

        if self.state.match_count() > 0 {
            let marker = if self.state.has_prev_page() { "< " } else { "  " };
            spans.push(Span::styled(marker.to_string(), self.styles.normal()));

            let cap = total / 3;
            for (pos, text) in self.state.visible() {
                let width = cell_width(text).min(cap);
                let style = if Some(pos) == self.state.selection() {
                    self.styles.selected()
                } else {
                    self.styles.normal()
                };
                spans.push(Span::styled(fit(text, width), style));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, total.saturating_sub(MARKER_WIDTH));
        if self.state.has_next_page() && total >= MARKER_WIDTH {
            buf.set_string(
                area.x + total - MARKER_WIDTH,
                area.y,
                " >",
                self.styles.normal(),
            );
        }
    }

    fn render_vertical(&self, area: Rect, buf: &mut Buffer) {
        let total = area.width;
        let mut spans = Vec::new();

        let prompt_w = prompt_width(self.state.prompt(), total);
        if prompt_w > 0 {
            spans.push(Span::styled(
                fit(self.state.prompt(), prompt_w),
                self.styles.selected(),
            ));
        }
        spans.extend(input_spans(
            self.state.pattern(),
            self.state.cursor(),
            total.saturating_sub(prompt_w),
            self.styles,
        ));
        buf.set_line(area.x, area.y, &Line::from(spans), total);

        for (row, (pos, text)) in self.state.visible().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.bottom() {
                break;
            }
            let style = if Some(pos) == self.state.selection() {
                self.styles.selected()
            } else {
                self.styles.normal()
            };
            buf.set_string(area.x, y, fit(text, total), style);
        }
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.styles.normal());
        match *self.state.budget() {
            LayoutBudget::Extent { .. } => self.render_horizontal(area, buf),
            LayoutBudget::Count { .. } => self.render_vertical(area, buf),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "menu_bar_tests.rs"]
mod tests;
