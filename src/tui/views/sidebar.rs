//! Sidebar view
//!
//! Shows the view switcher and a summary of the loaded dataset.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_view_switcher(frame, app, layout.view_switcher);
    render_summary(frame, app, layout.summary);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Findash ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if is_focused && app.sidebar_index == idx {
                ">"
            } else if app.active_view == *view {
                "▶"
            } else {
                " "
            };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", idx + 1), Style::default().fg(Color::Yellow)),
                Span::styled(view.label(), style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Render dataset summary
fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Dataset ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let years = app
        .dataset
        .years()
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        summary_line("Rows", app.dataset.len().to_string()),
        summary_line("Accounts", app.dataset.accounts().len().to_string()),
        summary_line("Units", app.dataset.business_units().len().to_string()),
        summary_line("Years", years),
        summary_line("Currency", app.settings.currency_symbol.clone()),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn summary_line(label: &str, value: String) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
