//! TUI Views module
//!
//! Contains the five dashboard pages plus the sidebar and status bar.

pub mod filtered;
pub mod margins;
pub mod overview;
pub mod raw_table;
pub mod sidebar;
pub mod status_bar;
pub mod trend;

use ratatui::Frame;

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Overview => {
            overview::render(frame, app, layout.main);
        }
        ActiveView::RawData => {
            raw_table::render(frame, app, layout.main);
        }
        ActiveView::Filtered => {
            filtered::render(frame, app, layout.main);
        }
        ActiveView::Trend => {
            trend::render(frame, app, layout.main);
        }
        ActiveView::Margins => {
            margins::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);
}
