//! Plain-text layout helpers.
//!
//! Prose is wrapped here rather than by `Paragraph::wrap` so that every
//! rendered [`Line`](ratatui::text::Line) is exactly one screen row, which
//! keeps scroll arithmetic in line units.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spaces substituted for a tab; terminal cells cannot hold tabs.
pub const TAB_WIDTH: usize = 4;

/// Greedy word wrap to `width` terminal cells.
///
/// Explicit newlines are kept, words wider than `width` are split, and an
/// empty input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            let mut word_width = word.width();

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut pieces = split_cells(&word, width);
                word = pieces.pop().unwrap_or_default();
                word_width = word.width();
                lines.extend(pieces);
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}

/// Cut `line` into rows of at most `width` cells without touching any
/// character, whitespace included.
///
/// A character wider than `width` gets a row of its own. An empty line is
/// one empty row.
pub fn split_cells(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Replace tabs with spaces, aligning to [`TAB_WIDTH`] cells.
pub fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += c.width().unwrap_or(0);
        }
    }
    out
}
