//! Topic page rendering.
//!
//! Entries of the active category are stacked top to bottom inside one
//! bordered block. The scroll offset follows keyboard focus so the focused
//! entry stays on screen.

use std::ops::Range;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::entry::entry_lines;
use super::Theme;
use crate::view::TopicPage;

/// Content lines for the active category plus the line range of each entry.
pub fn page_lines(page: &TopicPage, theme: &Theme, width: u16) -> (Vec<Line<'static>>, Vec<Range<usize>>) {
    let mut lines = Vec::new();
    let mut spans = Vec::with_capacity(page.entries().len());

    for (i, entry) in page.entries().iter().enumerate() {
        let start = lines.len();
        lines.extend(entry_lines(entry, i == page.focused_index(), theme, width));
        spans.push(start..lines.len());
    }

    (lines, spans)
}

/// Adjust `scroll` so that `focus` is in view.
///
/// An entry taller than the viewport may be scrolled anywhere within its own
/// extent. The result never scrolls past the last line.
pub fn clamp_scroll(scroll: u16, focus: Range<usize>, height: u16, total: usize) -> u16 {
    let height = usize::from(height);
    if height == 0 {
        return 0;
    }

    let upper = focus.start;
    let lower = focus.end.saturating_sub(height);
    let (lo, hi) = if lower <= upper { (lower, upper) } else { (upper, lower) };
    let max_scroll = total.saturating_sub(height);

    let scroll = usize::from(scroll).clamp(lo, hi).min(max_scroll);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

/// Render the active category of `page` and update its scroll offset.
pub fn render(frame: &mut Frame, page: &mut TopicPage, theme: &Theme, area: Rect) {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    let (mut lines, spans) = page_lines(page, theme, inner_width);

    if let Some(focus) = spans.get(page.focused_index()) {
        page.scroll = clamp_scroll(page.scroll, focus.clone(), inner_height, lines.len());
    } else {
        page.scroll = 0;
        lines.push(Line::styled(
            " No entries in this category",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let label = page.active_category().map_or("", |c| c.label.as_str());
    let position = if page.entries().is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", page.focused_index() + 1, page.entries().len())
    };
    let title = format!(" {}{} ", label, position);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        )
        .scroll((page.scroll, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::content::{
        CategoryDescriptor, Difficulty, PageDescriptor, TopicEntryDescriptor, VariantSet,
    };

    fn page() -> TopicPage {
        let entry = |title: &str| {
            Arc::new(TopicEntryDescriptor {
                title: title.into(),
                difficulty: Difficulty::Easy,
                description: "desc".into(),
                variants: VariantSet::from_pairs([("C", "a\nb\nc\nd")]).unwrap(),
                default_variant: None,
                explanation: String::new(),
                approach: None,
            })
        };
        TopicPage::new(Arc::new(PageDescriptor {
            id: "p".into(),
            title: "Page".into(),
            subtitle: None,
            categories: vec![CategoryDescriptor {
                id: "c".into(),
                label: "Cat".into(),
                entries: vec![entry("One"), entry("Two"), entry("Three")],
            }],
        }))
    }

    #[test]
    fn test_clamp_keeps_short_entry_visible() {
        // Entry at lines 20..25 in a 10-line viewport.
        assert_eq!(clamp_scroll(0, 20..25, 10, 100), 15);
        assert_eq!(clamp_scroll(40, 20..25, 10, 100), 20);
        assert_eq!(clamp_scroll(17, 20..25, 10, 100), 17);
    }

    #[test]
    fn test_clamp_allows_scrolling_inside_tall_entry() {
        // Entry at lines 10..40 in a 10-line viewport.
        assert_eq!(clamp_scroll(0, 10..40, 10, 100), 10);
        assert_eq!(clamp_scroll(25, 10..40, 10, 100), 25);
        assert_eq!(clamp_scroll(99, 10..40, 10, 100), 30);
    }

    #[test]
    fn test_clamp_never_passes_the_end() {
        assert_eq!(clamp_scroll(50, 0..3, 10, 5), 0);
        assert_eq!(clamp_scroll(3, 0..3, 0, 5), 0);
    }

    #[test]
    fn test_entry_spans_are_contiguous() {
        let mut page = page();
        page.focus_next();
        page.focused_entry_mut().unwrap().toggle_solution();

        let (lines, spans) = page_lines(&page, &Theme::dark(), 60);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, spans[1].start);
        assert_eq!(spans[1].end, spans[2].start);
        assert_eq!(spans[2].end, lines.len());
        // The revealed entry is taller than its hidden siblings.
        assert!(spans[1].len() > spans[0].len());
    }
}
