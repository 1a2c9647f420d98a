//! Margins view
//!
//! One gauge per quarter plus an annual gauge for the selected year.
//! Quarterly gauges are green when the margin is positive and red
//! otherwise; the annual gauge is always blue. When the year has no
//! revenue at all the view shows the error instead of gauges.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::display::format_percentage;
use crate::error::DashError;
use crate::models::Quarter;
use crate::reports::MarginReport;
use crate::tui::app::App;
use crate::tui::layout::MarginsLayout;

/// Render the margins view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MarginsLayout::new(area);

    let Some(year) = app.margin_year() else {
        render_message(frame, area, "No data loaded", Color::DarkGray);
        return;
    };

    render_header(frame, app, year, layout.header);

    let report = MarginReport::generate(
        app.dataset,
        &app.settings.revenue_accounts,
        &app.settings.cost_accounts,
        year,
    );

    match report {
        Ok(report) => {
            for quarter in Quarter::ALL {
                render_quarter_gauge(frame, &report, quarter, layout.quarters[quarter.index()]);
            }
            render_annual_gauge(frame, &report, layout.annual);
        }
        Err(err) if err.is_no_revenue() => {
            render_no_revenue(frame, &err, layout);
        }
        Err(err) => {
            render_message(frame, gauges_area(&layout), &err.to_string(), Color::Red);
        }
    }
}

/// The combined area the gauges would occupy
fn gauges_area(layout: &MarginsLayout) -> Rect {
    layout
        .quarters
        .iter()
        .fold(layout.annual, |acc, rect| acc.union(*rect))
}

/// Render the year selector readout
fn render_header(frame: &mut Frame, app: &App, year: i32, area: Rect) {
    let block = Block::default()
        .title(" Margins ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::raw("year "),
        Span::styled(
            year.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  revenue "),
        Span::styled(
            app.settings.revenue_accounts.join(", "),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  │  costs "),
        Span::styled(
            app.settings.cost_accounts.join(", "),
            Style::default().fg(Color::Red),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render one quarterly gauge
fn render_quarter_gauge(frame: &mut Frame, report: &MarginReport, quarter: Quarter, area: Rect) {
    let margin = report.quarterly[quarter.index()];
    let color = if margin > 0.0 { Color::Green } else { Color::Red };

    let block = Block::default()
        .title(format!(" {} ", quarter.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio(gauge_ratio(margin))
        .label(format_percentage(margin));

    frame.render_widget(gauge, area);
}

/// Render the annual gauge
fn render_annual_gauge(frame: &mut Frame, report: &MarginReport, area: Rect) {
    let block = Block::default()
        .title(" Annual ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(gauge_ratio(report.annual))
        .label(format_percentage(report.annual));

    frame.render_widget(gauge, area);
}

/// Render the no-revenue error in place of the gauges
fn render_no_revenue(frame: &mut Frame, err: &DashError, layout: MarginsLayout) {
    let area = gauges_area(&layout);

    let block = Block::default()
        .title(" Margins ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render a centered message instead of the gauges
fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let block = Block::default()
        .title(" Margins ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Paragraph::new(message.to_string())
        .block(block)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

/// Map a margin percentage onto the 0..1 gauge range
fn gauge_ratio(margin_pct: f64) -> f64 {
    (margin_pct / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(60.0), 0.6);
        assert_eq!(gauge_ratio(-25.0), 0.0);
        assert_eq!(gauge_ratio(150.0), 1.0);
    }
}
