//! Trend view
//!
//! Bar chart of annual totals per year for the selected account, with
//! bar labels in millions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_millions;
use crate::reports::TrendReport;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the trend view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    let Some(account) = app.trend_account() else {
        render_empty(frame, area);
        return;
    };
    let account = account.to_string();
    let unit = app.trend_unit().map(str::to_string);

    let report = TrendReport::generate(app.dataset, &account, unit.as_deref());

    render_header(frame, &report, layout.header);
    render_chart(frame, app, &report, layout.content);
}

/// Render the selector readout
fn render_header(frame: &mut Frame, report: &TrendReport, area: Rect) {
    let block = Block::default()
        .title(" Yearly Trend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::raw("account "),
        Span::styled(
            report.account.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  unit "),
        Span::styled(
            report.unit_label().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  annual totals in M$"),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the bar chart, one bar per year in ascending order
fn render_chart(frame: &mut Frame, app: &App, report: &TrendReport, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if report.points.is_empty() {
        let text = Paragraph::new("No data for this account")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = report
        .points
        .iter()
        .map(|point| {
            let units = point.total.to_f64();
            Bar::default()
                .value(units.max(0.0) as u64)
                .text_value(format_millions(units))
                .label(Line::from(point.year.to_string()))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(chart, area);
}

/// Render the view when the dataset has no accounts
fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Yearly Trend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new("No data loaded")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}
