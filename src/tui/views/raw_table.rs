//! Raw data view
//!
//! Shows every record in the dataset as a scrollable table. The month
//! columns can be toggled off to leave only the derived quarterly and
//! annual columns.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::record_cells;
use crate::reports::RawListing;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the raw data view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    let listing = RawListing::generate(app.dataset, app.show_raw_months);

    render_header(frame, app, &listing, layout.header);
    render_table(frame, app, &listing, layout.content);
}

/// Render the view header with the row window readout
fn render_header(frame: &mut Frame, app: &App, listing: &RawListing, area: Rect) {
    let block = Block::default()
        .title(" Raw Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let months = if listing.include_months { "on" } else { "off" };
    let line = Line::from(vec![
        Span::styled(
            format!("{} rows", listing.records().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  │  months: "),
        Span::styled(months, Style::default().fg(Color::Yellow)),
        Span::raw(format!("  │  from row {}", app.scroll_offset + 1)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the record table, windowed by the scroll offset
fn render_table(frame: &mut Frame, app: &App, listing: &RawListing, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if listing.records().is_empty() {
        let text = Paragraph::new("No records loaded")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(
        listing
            .headers()
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Cyan));

    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = listing
        .records()
        .iter()
        .skip(app.scroll_offset)
        .take(visible)
        .map(|record| Row::new(record_cells(record, listing.include_months)))
        .collect();

    let widths = column_widths(listing.include_months);
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

/// Column widths matching the listing's header layout
pub(super) fn column_widths(include_months: bool) -> Vec<Constraint> {
    let mut widths = vec![
        Constraint::Min(14),   // Account
        Constraint::Length(5), // Year
        Constraint::Length(9), // Scenario
        Constraint::Length(9), // Unit
        Constraint::Length(4), // Currency
    ];
    if include_months {
        widths.extend(std::iter::repeat(Constraint::Length(11)).take(12));
    }
    widths.extend(std::iter::repeat(Constraint::Length(11)).take(4));
    widths.push(Constraint::Length(13)); // Annual Total
    widths
}
