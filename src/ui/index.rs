//! Index view rendering.
//!
//! Lists every topic page with its category and entry counts.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;

/// Render the page index as a selectable table.
///
/// The table's scroll offset is carried across frames in
/// [`App::index_offset`] so mouse clicks can be mapped back to pages.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(ref site) = app.site else {
        let message = match app.load_error {
            Some(ref err) => format!(" {}", err),
            None => " Loading...".to_string(),
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block.title(" Topics "));
        frame.render_widget(paragraph, area);
        return;
    };

    let header = Row::new(vec![
        Cell::from("Topic"),
        Cell::from("About"),
        Cell::from("Categories"),
        Cell::from("Entries"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = site
        .pages
        .iter()
        .map(|page| {
            Row::new(vec![
                Cell::from(page.title.clone()),
                Cell::from(page.subtitle.clone().unwrap_or_default())
                    .style(Style::default().add_modifier(Modifier::DIM)),
                Cell::from(page.categories.len().to_string()),
                Cell::from(page.entry_count().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(4),
        Constraint::Min(10),
        Constraint::Min(7),
    ];

    let selected = app.selected_page.min(site.pages.len().saturating_sub(1));
    let title = format!(" Topics [{}/{}] ", selected + 1, site.pages.len());

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default()
        .with_offset(app.index_offset)
        .with_selected(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
    app.index_offset = state.offset();
}
