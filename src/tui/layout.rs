//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! plus the per-view splits for the data views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (view switcher, dataset summary)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Title/header area
    pub header: Rect,
    /// View switcher area
    pub view_switcher: Rect,
    /// Dataset summary area
    pub summary: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(7), // View switcher
                Constraint::Min(5),    // Summary
            ])
            .split(area);

        Self {
            header: chunks[0],
            view_switcher: chunks[1],
            summary: chunks[2],
        }
    }
}

/// Layout for views with a selector header above their content
pub struct MainPanelLayout {
    /// Header area (title, selector readout)
    pub header: Rect,
    /// Content area
    pub content: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Content
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
        }
    }
}

/// Layout for the filtered view: rows table plus a totals block
pub struct FilteredLayout {
    /// Selector header
    pub header: Rect,
    /// Matching rows table
    pub rows: Rect,
    /// Quarterly and annual totals
    pub totals: Rect,
}

impl FilteredLayout {
    /// Calculate filtered view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Rows
                Constraint::Length(8), // Totals
            ])
            .split(area);

        Self {
            header: chunks[0],
            rows: chunks[1],
            totals: chunks[2],
        }
    }
}

/// Layout for the margins view: one gauge per quarter plus the annual gauge
pub struct MarginsLayout {
    /// Selector header
    pub header: Rect,
    /// Quarterly gauges, Q1..Q4
    pub quarters: [Rect; 4],
    /// Annual gauge
    pub annual: Rect,
}

impl MarginsLayout {
    /// Calculate margins view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Q row 1
                Constraint::Length(3), // Q row 2
                Constraint::Min(3),    // Annual
            ])
            .split(area);

        let row1 = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        let row2 = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        Self {
            header: chunks[0],
            quarters: [row1[0], row1[1], row2[0], row2[1]],
            annual: chunks[3],
        }
    }
}
