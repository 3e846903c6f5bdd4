//! Terminal UI rendering using ratatui.
//!
//! Rendering is split between pure line builders, which turn view state
//! into `Vec<Line>`, and `render` functions that place those lines on a
//! frame. The line builders are what most tests exercise.
//!
//! ## Submodules
//!
//! - [`index`]: Table of all topic pages
//! - [`page`](mod@page): The active category of a topic page, scrolled to the focused entry
//! - [`entry`]: One entry: header, description, and its revealed body
//! - [`code`]: Variant selector and code block
//! - [`approach`]: Step-by-step breakdown with complexity and pattern
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`text`]: Word wrap, code row splitting and tab expansion (all in terminal cells)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content                         │
//! │ (index::render / page::render)       │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod approach;
pub mod code;
pub mod common;
pub mod entry;
pub mod index;
pub mod page;
pub mod text;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// First screen row of the index table body: header, tabs, border, column
/// headings.
pub const INDEX_BODY_ROW: u16 = 4;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let top = (area.height / 2).saturating_sub(2);
        let centered = Rect::new(0, top, area.width, 5u16.min(area.height - top));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.current_view() {
        View::Index => index::render(frame, app, chunks[2]),
        View::Page => {
            if let Some(ref mut topic) = app.page {
                page::render(frame, topic, &app.theme, chunks[2]);
            }
        }
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Plain text of a rendered line.
#[cfg(test)]
pub(crate) fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::source::BuiltinSource;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn app() -> App {
        let mut app = App::new(Box::new(BuiltinSource::new()), Theme::dark());
        app.reload_content();
        app
    }

    #[test]
    fn test_index_lists_pages() {
        let mut app = app();
        let screen = render(&mut app, 100, 24);
        assert!(screen.contains("DSA VIEWER"));
        assert!(screen.contains("Binary Search Trees"));
        assert!(screen.contains("Linked Lists"));
        assert!(screen.contains("Searching"));
        assert!(screen.contains("Index | built-in"));
    }

    #[test]
    fn test_page_shows_tabs_and_entries() {
        let mut app = app();
        app.open_page("bst");
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("1:Fundamentals"));
        assert!(screen.contains("2:Operations"));
        assert!(screen.contains("3:Balancing"));
        assert!(screen.contains("Index > Binary Search Trees > Fundamentals"));
        assert!(screen.contains("[Easy]") || screen.contains("[Medium]"));
    }

    #[test]
    fn test_revealed_entry_shows_code() {
        let mut app = app();
        app.open_page("bst");
        app.toggle_solution();
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("▼ "));
        assert!(screen.contains("│ "));
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut app = app();
        app.open_page("bst");
        app.select_category_index(1);
        for _ in 0..3 {
            app.toggle_solution();
            app.select_next();
        }
        app.select_last();
        render(&mut app, 80, 14);

        let page = app.page.as_ref().unwrap();
        assert!(page.scroll > 0);
    }

    #[test]
    fn test_long_code_line_stays_reachable() {
        let mut app = app();
        app.open_page("bst");
        app.select_category_index(1);
        app.select_last();
        app.toggle_solution();

        // "Validate a BST" in Java has a 73 column condition; 72 fit beside
        // the gutter at this width.
        let screen = render(&mut app, 80, 60);
        assert!(screen.contains("[Java]"));
        assert!(screen.contains("│     if ((lo != null && node.val <= lo) || (hi != null && node.val >= hi)"));
        assert!(screen.contains("↪ )"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.toggle_help();
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_too_small_terminal() {
        let mut app = app();
        let screen = render(&mut app, 40, 10);
        assert!(screen.contains("Terminal too small: 40x10"));
    }
}
