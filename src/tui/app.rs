//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the immutable dataset snapshot, the active page, and the selector
//! indices for each view. Queries never mutate the dataset.

use crate::config::Settings;
use crate::data::Dataset;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    RawData,
    Filtered,
    Trend,
    Margins,
}

impl ActiveView {
    /// Sidebar menu order
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Overview,
        ActiveView::RawData,
        ActiveView::Filtered,
        ActiveView::Trend,
        ActiveView::Margins,
    ];

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::RawData => "Raw Data",
            ActiveView::Filtered => "Filtered",
            ActiveView::Trend => "Trend",
            ActiveView::Margins => "Margins",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Main application state
pub struct App<'a> {
    /// The immutable dataset snapshot
    pub dataset: &'a Dataset,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Selected entry in the sidebar menu
    pub sidebar_index: usize,

    /// Raw Data view: whether month columns are shown (default on)
    pub show_raw_months: bool,

    /// Filtered view: whether month columns are shown (default off)
    pub show_filtered_months: bool,

    /// Filtered view: index into dataset.years()
    pub filter_year_index: usize,

    /// Filtered view: index into dataset.accounts()
    pub filter_account_index: usize,

    /// Filtered view: 0 = all units, 1.. = index into dataset.business_units() + 1
    pub filter_unit_index: usize,

    /// Trend view: index into dataset.accounts()
    pub trend_account_index: usize,

    /// Trend view: 0 = all units, 1.. = index into dataset.business_units() + 1
    pub trend_unit_index: usize,

    /// Margins view: index into dataset.years()
    pub margin_year_index: usize,

    /// Scroll offset for the raw table
    pub scroll_offset: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dataset: &'a Dataset, settings: &'a Settings) -> Self {
        Self {
            dataset,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            sidebar_index: 0,
            show_raw_months: true,
            show_filtered_months: false,
            filter_year_index: 0,
            filter_account_index: 0,
            filter_unit_index: 0,
            trend_account_index: 0,
            trend_unit_index: 0,
            margin_year_index: 0,
            scroll_offset: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.scroll_offset = 0;
        if let Some(pos) = ActiveView::ALL.iter().position(|v| *v == view) {
            self.sidebar_index = pos;
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Year selected in the filtered view, if the dataset has any
    pub fn filter_year(&self) -> Option<i32> {
        self.dataset.years().get(self.filter_year_index).copied()
    }

    /// Account selected in the filtered view
    pub fn filter_account(&self) -> Option<&str> {
        self.dataset
            .accounts()
            .get(self.filter_account_index)
            .map(String::as_str)
    }

    /// Unit selected in the filtered view; `None` means all units
    pub fn filter_unit(&self) -> Option<&str> {
        selected_unit(self.dataset, self.filter_unit_index)
    }

    /// Account selected in the trend view
    pub fn trend_account(&self) -> Option<&str> {
        self.dataset
            .accounts()
            .get(self.trend_account_index)
            .map(String::as_str)
    }

    /// Unit selected in the trend view; `None` means all units
    pub fn trend_unit(&self) -> Option<&str> {
        selected_unit(self.dataset, self.trend_unit_index)
    }

    /// Year selected in the margins view
    pub fn margin_year(&self) -> Option<i32> {
        self.dataset.years().get(self.margin_year_index).copied()
    }

    /// Cycle the filtered-view year selector
    pub fn cycle_filter_year(&mut self, forward: bool) {
        cycle(&mut self.filter_year_index, self.dataset.years().len(), forward);
    }

    /// Cycle the filtered-view account selector
    pub fn cycle_filter_account(&mut self, forward: bool) {
        cycle(
            &mut self.filter_account_index,
            self.dataset.accounts().len(),
            forward,
        );
    }

    /// Cycle the filtered-view unit selector (slot 0 is "all units")
    pub fn cycle_filter_unit(&mut self, forward: bool) {
        cycle(
            &mut self.filter_unit_index,
            self.dataset.business_units().len() + 1,
            forward,
        );
    }

    /// Cycle the trend-view account selector
    pub fn cycle_trend_account(&mut self, forward: bool) {
        cycle(
            &mut self.trend_account_index,
            self.dataset.accounts().len(),
            forward,
        );
    }

    /// Cycle the trend-view unit selector (slot 0 is "all units")
    pub fn cycle_trend_unit(&mut self, forward: bool) {
        cycle(
            &mut self.trend_unit_index,
            self.dataset.business_units().len() + 1,
            forward,
        );
    }

    /// Cycle the margins-view year selector
    pub fn cycle_margin_year(&mut self, forward: bool) {
        cycle(&mut self.margin_year_index, self.dataset.years().len(), forward);
    }

    /// Scroll the raw table down, bounded by the record count
    pub fn scroll_down(&mut self, max: usize) {
        if self.scroll_offset + 1 < max {
            self.scroll_offset += 1;
        }
    }

    /// Scroll the raw table up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

/// Unit selector resolution: slot 0 is the "all units" sentinel-free choice
fn selected_unit(dataset: &Dataset, index: usize) -> Option<&str> {
    if index == 0 {
        None
    } else {
        dataset.business_units().get(index - 1).map(String::as_str)
    }
}

/// Wrap-around cycling over a selector of `len` entries
fn cycle(index: &mut usize, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    *index = if forward {
        (*index + 1) % len
    } else {
        (*index + len - 1) % len
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialRecord, Money};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            FinancialRecord::new("Sales", 2021, "Actuals", "UnitA", "USD", [Some(Money::from_units(1)); 12]),
            FinancialRecord::new("Sales", 2022, "Actuals", "UnitB", "USD", [Some(Money::from_units(1)); 12]),
        ])
    }

    #[test]
    fn test_unit_selector_slot_zero_is_all_units() {
        let data = dataset();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        assert_eq!(app.filter_unit(), None);
        app.cycle_filter_unit(true);
        assert_eq!(app.filter_unit(), Some("UnitA"));
        app.cycle_filter_unit(true);
        assert_eq!(app.filter_unit(), Some("UnitB"));
        app.cycle_filter_unit(true);
        assert_eq!(app.filter_unit(), None);
    }

    #[test]
    fn test_cycle_wraps_backwards() {
        let data = dataset();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        assert_eq!(app.filter_year(), Some(2021));
        app.cycle_filter_year(false);
        assert_eq!(app.filter_year(), Some(2022));
    }

    #[test]
    fn test_switch_view_resets_scroll_and_syncs_menu() {
        let data = dataset();
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        app.scroll_offset = 5;
        app.switch_view(ActiveView::Margins);
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.sidebar_index, 4);
    }

    #[test]
    fn test_empty_dataset_selectors() {
        let data = Dataset::new(Vec::new());
        let settings = Settings::default();
        let mut app = App::new(&data, &settings);

        assert_eq!(app.filter_year(), None);
        assert_eq!(app.filter_account(), None);
        // cycling over empty selectors must not panic or move
        app.cycle_filter_year(true);
        app.cycle_filter_account(true);
        assert_eq!(app.filter_year_index, 0);
    }
}
