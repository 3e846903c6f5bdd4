//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, View};
use crate::view::TopicPage;

/// Render the header bar with the current topic.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Span::styled(" DSA VIEWER ", Style::default().add_modifier(Modifier::BOLD));

    let Some(ref site) = app.site else {
        let status = if app.load_error.is_some() { "| No content" } else { "| Loading..." };
        frame.render_widget(Paragraph::new(Line::from(vec![title, Span::raw(status)])), area);
        return;
    };

    let mut spans = vec![title, Span::raw("│ ")];
    match app.page {
        Some(ref page) => {
            let descriptor = page.descriptor();
            spans.push(Span::styled(descriptor.title.clone(), app.theme.header));
            if let Some(ref subtitle) = descriptor.subtitle {
                spans.push(Span::raw(" │ "));
                spans.push(Span::styled(
                    subtitle.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }
        None => {
            let entries: usize = site.pages.iter().map(|p| p.entry_count()).sum();
            spans.push(Span::styled(
                format!("{}", site.pages.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" topics │ "));
            spans.push(Span::styled(
                format!("{}", entries),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" entries"));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Tab titles for the page's categories, numbered for the digit keys.
pub fn category_tab_titles(page: &TopicPage) -> Vec<String> {
    page.categories()
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}:{}", i + 1, category.label))
        .collect()
}

/// Which tab a click at `column` lands on.
///
/// Mirrors the [`Tabs`] layout: one cell of padding on either side of each
/// title and a one-cell divider between tabs, with titles measured in
/// terminal cells.
pub fn tab_at_column(titles: &[String], column: u16) -> Option<usize> {
    let column = usize::from(column);
    let mut x = 0;
    for (i, title) in titles.iter().enumerate() {
        let end = x + title.width() + 2;
        if column < end {
            return (column >= x).then_some(i);
        }
        x = end + 1;
    }
    None
}

/// Render the tab bar: category tabs on a page, a hint on the index.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref page) = app.page else {
        let hint = Paragraph::new(" Choose a topic").style(app.theme.tab_inactive);
        frame.render_widget(hint, area);
        return;
    };

    let titles: Vec<Line> = category_tab_titles(page).into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .select(page.active_category_index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: breadcrumb trail, content source, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref err) = app.load_error {
        let paragraph = Paragraph::new(format!(" Error: {} | r:retry q:quit", err))
            .style(Style::default().fg(app.theme.hard));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if app.site.is_some() {
        let controls = match app.current_view() {
            View::Index => "↑↓:select Enter:open ?:help q:quit",
            View::Page => "Tab:category ↑↓:entry Enter:reveal t:approach []:variant Esc:back ?:help",
        };
        format!(
            " {} | {} | {}",
            app.breadcrumb(),
            app.source_description(),
            controls
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |name: &'static str| {
        Line::from(vec![Span::styled(name, Style::default().add_modifier(Modifier::BOLD))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Index"),
        Line::from("  ↑/↓ j/k     Select topic"),
        Line::from("  Enter       Open topic"),
        Line::from(""),
        section(" Topic page"),
        Line::from("  Tab ←/→ 1-9 Switch category"),
        Line::from("  ↑/↓ j/k     Focus entry"),
        Line::from("  Home/End    First/last entry"),
        Line::from("  Enter/Space Show/hide solution"),
        Line::from("  s / a / t   Solution/Approach/toggle"),
        Line::from("  [ / ]       Previous/next language"),
        Line::from("  PgUp/PgDn   Scroll long entries"),
        Line::from("  Esc         Back to index"),
        Line::from(""),
        section(" General"),
        Line::from("  r         Reload content"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 25u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec!["1:Fundamentals".into(), "2:Ops".into()]
    }

    #[test]
    fn test_tab_at_column() {
        // [ 1:Fundamentals ]|[ 2:Ops ]
        assert_eq!(tab_at_column(&titles(), 0), Some(0));
        assert_eq!(tab_at_column(&titles(), 15), Some(0));
        assert_eq!(tab_at_column(&titles(), 16), None);
        assert_eq!(tab_at_column(&titles(), 17), Some(1));
        assert_eq!(tab_at_column(&titles(), 23), Some(1));
        assert_eq!(tab_at_column(&titles(), 24), None);
    }

    #[test]
    fn test_tab_at_column_wide_labels() {
        // "1:二分探索" is 6 chars but 10 cells: [ 1:二分探索 ]|[ 2:Ops ]
        let titles = vec!["1:二分探索".to_string(), "2:Ops".to_string()];
        assert_eq!(tab_at_column(&titles, 11), Some(0));
        assert_eq!(tab_at_column(&titles, 12), None);
        assert_eq!(tab_at_column(&titles, 13), Some(1));
        assert_eq!(tab_at_column(&titles, 19), Some(1));
        assert_eq!(tab_at_column(&titles, 20), None);
    }
}
