//! Code view: variant selector, verbatim code block, explanation.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::text::{expand_tabs, split_cells, wrap};
use super::Theme;
use crate::view::CodePresenter;

const INDENT: &str = "    ";
const GUTTER: &str = "│ ";
/// Gutter of a row that continues the code line above it.
const CONTINUATION: &str = "↪ ";

/// Lines for a mounted [`CodePresenter`] followed by its explanation.
pub fn code_lines(
    presenter: &CodePresenter,
    explanation: &str,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![selector_line(presenter, theme)];

    // Long code lines are soft-wrapped so nothing is clipped.
    let gutter = Style::default().fg(theme.border);
    let code_width = usize::from(width).saturating_sub(INDENT.len() + GUTTER.width());
    for code_line in presenter.displayed_content().lines() {
        for (i, row) in split_cells(&expand_tabs(code_line), code_width).into_iter().enumerate() {
            let marker = if i == 0 { GUTTER } else { CONTINUATION };
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(marker, gutter),
                Span::styled(row, theme.code),
            ]));
        }
    }

    if !explanation.is_empty() {
        lines.push(Line::from(""));
        let text_width = usize::from(width).saturating_sub(INDENT.len());
        for row in wrap(explanation, text_width) {
            lines.push(Line::from(vec![Span::raw(INDENT), Span::raw(row)]));
        }
    }

    lines
}

/// One selector control per variant label; the active one is bracketed.
fn selector_line(presenter: &CodePresenter, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(INDENT)];
    for (i, label) in presenter.variants().labels().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", theme.tab_inactive));
        }
        if i == presenter.active_index() {
            spans.push(Span::styled(
                format!("[{}]", label),
                theme.tab_active.add_modifier(Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", label), theme.tab_inactive));
        }
    }
    Line::from(spans)
}
