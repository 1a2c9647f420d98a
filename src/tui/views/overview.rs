//! Overview view
//!
//! The landing page: a short description of the dashboard and what each
//! view shows.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the overview page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Financial Dashboard ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(""),
        Line::from("  Read-only reporting over the loaded financial dataset."),
        Line::from(""),
        item("2", "Raw Data", "every line item, with or without month columns"),
        item("3", "Filtered", "one year and account, with quarterly and annual totals"),
        item("4", "Trend", "annual totals per year for one account"),
        item("5", "Margins", "quarterly and annual margin gauges for one year"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Revenue accounts: "),
            Span::styled(
                app.settings.revenue_accounts.join(", "),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Cost accounts:    "),
            Span::styled(
                app.settings.cost_accounts.join(", "),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn item<'a>(key: &'a str, name: &'a str, blurb: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<10}", name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(blurb, Style::default().fg(Color::DarkGray)),
    ])
}
