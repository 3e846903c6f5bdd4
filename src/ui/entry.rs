//! Entry rendering: header, description and the revealed body.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::approach::approach_lines;
use super::code::code_lines;
use super::text::wrap;
use super::Theme;
use crate::view::{EntryBody, SubTab, TopicEntry};

const INDENT: &str = "  ";

/// Lines for one entry, ending with a blank separator.
pub fn entry_lines(entry: &TopicEntry, focused: bool, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let descriptor = entry.descriptor();
    let marker = if entry.is_solution_visible() { "▼ " } else { "▶ " };
    let title_style = if focused {
        theme.selected
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.highlight)),
        Span::styled(descriptor.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", descriptor.difficulty.label()),
            theme.difficulty_style(&descriptor.difficulty),
        ),
    ])];

    let text_width = usize::from(width).saturating_sub(INDENT.len());
    for row in wrap(&descriptor.description, text_width) {
        lines.push(Line::from(vec![Span::raw(INDENT), Span::raw(row)]));
    }

    match entry.body() {
        EntryBody::Hidden => {}
        EntryBody::Code {
            presenter,
            explanation,
            sub_tabs,
        } => {
            lines.push(Line::from(""));
            if sub_tabs {
                lines.push(sub_tab_line(entry.active_sub_tab(), theme));
            }
            lines.extend(code_lines(presenter, explanation, theme, width));
        }
        EntryBody::Approach(approach) => {
            lines.push(Line::from(""));
            lines.push(sub_tab_line(entry.active_sub_tab(), theme));
            lines.extend(approach_lines(approach, theme, width));
        }
    }

    lines.push(Line::from(""));
    lines
}

fn sub_tab_line(active: SubTab, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(INDENT)];
    for (i, tab) in [SubTab::Solution, SubTab::Approach].into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if tab == active {
            spans.push(Span::styled(format!("[{}]", tab.label()), theme.tab_active));
        } else {
            spans.push(Span::styled(format!(" {} ", tab.label()), theme.tab_inactive));
        }
    }
    Line::from(spans)
}
