//! Status bar view
//!
//! Shows the active view, any status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            app.active_view.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = view_hints(app.active_view);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Key hints for the active view
fn view_hints(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Overview => " 1-5:Views  Tab:Focus  q:Quit ",
        ActiveView::RawData => " m:Months  j/k:Scroll  g/G:Top/End  q:Quit ",
        ActiveView::Filtered => " y:Year  a:Account  u:Unit  m:Months  q:Quit ",
        ActiveView::Trend => " a:Account  u:Unit  q:Quit ",
        ActiveView::Margins => " y:Year  q:Quit ",
    }
}
