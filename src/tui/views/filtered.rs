//! Filtered view
//!
//! Shows the records matching the selected year, account, and optional
//! business unit, plus the quarterly totals and the annual total of the
//! slice.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::record_cells;
use crate::models::Quarter;
use crate::reports::{raw, FilteredReport};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::FilteredLayout;

/// Render the filtered view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FilteredLayout::new(area);

    let (Some(year), Some(account)) = (app.filter_year(), app.filter_account()) else {
        render_empty(frame, area);
        return;
    };
    let account = account.to_string();
    let unit = app.filter_unit().map(str::to_string);

    let report = FilteredReport::generate(
        app.dataset,
        year,
        &account,
        unit.as_deref(),
        !app.show_filtered_months,
    );

    render_header(frame, app, &report, layout.header);
    render_rows(frame, app, &report, layout.rows);
    render_totals(frame, &report, layout.totals);
}

/// Render the selector readout
fn render_header(frame: &mut Frame, app: &App, report: &FilteredReport, area: Rect) {
    let block = Block::default()
        .title(" Filtered ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::raw("year "),
        Span::styled(
            report.year.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  account "),
        Span::styled(
            report.account.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  unit "),
        Span::styled(
            report.unit_label().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  months: "),
        Span::styled(
            if app.show_filtered_months { "on" } else { "off" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the matching rows
fn render_rows(frame: &mut Frame, app: &App, report: &FilteredReport, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if report.rows.is_empty() {
        let text = Paragraph::new("No rows match the current selection")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let include_months = !report.hide_months;

    let header = Row::new(
        raw::projection_headers(include_months)
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Cyan));

    let rows: Vec<Row> = report
        .rows
        .iter()
        .map(|record| Row::new(record_cells(record, include_months)))
        .collect();

    let widths = super::raw_table::column_widths(include_months);
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

/// Render the quarterly totals and annual total of the slice
fn render_totals(frame: &mut Frame, report: &FilteredReport, area: Rect) {
    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Quarter::ALL
        .iter()
        .map(|quarter| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<8}", quarter.label()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>16}", report.quarterly_totals[quarter.index()].to_string()),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(
            "  Annual  ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>14}", report.annual_total.to_string()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the view when the dataset has no selectable years or accounts
fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Filtered ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new("No data loaded")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}
