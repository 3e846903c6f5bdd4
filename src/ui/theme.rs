//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::content::Difficulty;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Badge color for easy entries.
    pub easy: Color,
    /// Badge color for medium entries.
    pub medium: Color,
    /// Badge color for hard entries.
    pub hard: Color,
    /// Color for borders, separators and unrecognized difficulty badges.
    pub border: Color,
    /// Style for header rows and section banners.
    pub header: Style,
    /// Style for the focused entry title and selected index rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Style for code block lines.
    pub code: Style,
    /// Style for keyword chips in approach steps.
    pub keyword: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            easy: Color::Green,
            medium: Color::Yellow,
            hard: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            code: Style::default().fg(Color::White),
            keyword: Style::default().fg(Color::Black).bg(Color::Cyan),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            easy: Color::Green,
            medium: Color::Yellow,
            hard: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            code: Style::default().fg(Color::Black),
            keyword: Style::default().fg(Color::White).bg(Color::Blue),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Badge style for a difficulty. Unrecognized labels get the neutral
    /// border color.
    pub fn difficulty_style(&self, difficulty: &Difficulty) -> Style {
        match difficulty {
            Difficulty::Easy => Style::default().fg(self.easy),
            Difficulty::Medium => Style::default().fg(self.medium),
            Difficulty::Hard => Style::default().fg(self.hard).add_modifier(Modifier::BOLD),
            Difficulty::Unrecognized(_) => Style::default().fg(self.border),
        }
    }
}
