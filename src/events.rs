use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};
use crate::ui::common::{category_tab_titles, tab_at_column};
use crate::view::SubTab;

/// Screen row of the category tab bar.
pub const TAB_ROW: u16 = 1;

/// Lines moved by PgUp/PgDn.
const SCROLL_STEP: i32 = 10;

/// File written by the in-app export key.
pub const EXPORT_FILE: &str = "dsa-viewer-export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
///
/// Only presses act. Terminals that report key releases (and repeats on
/// some platforms) would otherwise run every toggle twice.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('r') => {
            if app.reload_content() {
                app.set_status_message("Content reloaded".to_string());
            } else if let Some(err) = app.load_error.clone() {
                app.set_status_message(err);
            } else {
                app.set_status_message("Content unchanged".to_string());
            }
        }

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_content(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => match app.current_view() {
            View::Index => handle_index_key(app, key),
            View::Page => handle_page_key(app, key),
        },
    }
}

fn handle_index_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.open_selected_page();
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Category tabs
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_category();
            } else {
                app.next_category();
            }
        }
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_category(),
        KeyCode::Right | KeyCode::Char('l') => app.next_category(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_category_index(digit as usize - 1);
            }
        }

        // Entry focus
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Focused entry
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_solution(),
        KeyCode::Char('a') => {
            app.select_sub_tab(SubTab::Approach);
        }
        KeyCode::Char('s') => {
            app.select_sub_tab(SubTab::Solution);
        }
        KeyCode::Char('t') => {
            app.toggle_sub_tab();
        }
        KeyCode::Char(']') => app.next_variant(),
        KeyCode::Char('[') => app.prev_variant(),

        KeyCode::PageUp => app.scroll_by(-SCROLL_STEP),
        KeyCode::PageDown => app.scroll_by(SCROLL_STEP),

        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        _ => {}
    }
}

/// Handle mouse events
///
/// `content_start_row` is the first row of the index table's body, just
/// below its header.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, content_start_row: u16) {
    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Down(MouseButton::Left) => {
            let clicked_row = mouse.row;

            match app.current_view() {
                View::Page if clicked_row == TAB_ROW => {
                    let titles = app.page.as_ref().map(category_tab_titles).unwrap_or_default();
                    if let Some(index) = tab_at_column(&titles, mouse.column) {
                        app.select_category_index(index);
                    }
                }
                View::Index if clicked_row >= content_start_row => {
                    let item_row = app.index_offset + usize::from(clicked_row - content_start_row);
                    let count = app.site.as_ref().map_or(0, |site| site.pages.len());
                    if item_row < count {
                        app.selected_page = item_row;
                    }
                }
                _ => {}
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => app.go_back(),

        _ => {}
    }
}
