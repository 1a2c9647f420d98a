//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! active view. All selectors are cycled in place; the dataset itself
//! is never mutated.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveView, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }

        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }

        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Overview);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::RawData);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Filtered);
            return Ok(());
        }
        KeyCode::Char('4') => {
            app.switch_view(ActiveView::Trend);
            return Ok(());
        }
        KeyCode::Char('5') => {
            app.switch_view(ActiveView::Margins);
            return Ok(());
        }

        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_index + 1 < ActiveView::ALL.len() {
                app.sidebar_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_index = app.sidebar_index.saturating_sub(1);
        }
        KeyCode::Enter => {
            let view = ActiveView::ALL[app.sidebar_index];
            app.switch_view(view);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Overview => Ok(()),
        ActiveView::RawData => handle_raw_key(app, key),
        ActiveView::Filtered => handle_filtered_key(app, key),
        ActiveView::Trend => handle_trend_key(app, key),
        ActiveView::Margins => handle_margins_key(app, key),
    }
}

/// Raw data view: month toggle and scrolling
fn handle_raw_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('m') => {
            app.show_raw_months = !app.show_raw_months;
            app.set_status(if app.show_raw_months {
                "month columns shown"
            } else {
                "month columns hidden"
            });
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(app.dataset.len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_offset = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_offset = app.dataset.len().saturating_sub(1);
        }
        _ => {}
    }

    Ok(())
}

/// Filtered view: year/account/unit selectors and month toggle
fn handle_filtered_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') => app.cycle_filter_year(true),
        KeyCode::Char('Y') => app.cycle_filter_year(false),
        KeyCode::Char('a') => app.cycle_filter_account(true),
        KeyCode::Char('A') => app.cycle_filter_account(false),
        KeyCode::Char('u') => app.cycle_filter_unit(true),
        KeyCode::Char('U') => app.cycle_filter_unit(false),
        KeyCode::Char('m') => {
            app.show_filtered_months = !app.show_filtered_months;
            app.set_status(if app.show_filtered_months {
                "month columns shown"
            } else {
                "month columns hidden"
            });
        }
        _ => {}
    }

    Ok(())
}

/// Trend view: account/unit selectors
fn handle_trend_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('a') => app.cycle_trend_account(true),
        KeyCode::Char('A') => app.cycle_trend_account(false),
        KeyCode::Char('u') => app.cycle_trend_unit(true),
        KeyCode::Char('U') => app.cycle_trend_unit(false),
        _ => {}
    }

    Ok(())
}

/// Margins view: year selector
fn handle_margins_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') => app.cycle_margin_year(true),
        KeyCode::Char('Y') => app.cycle_margin_year(false),
        _ => {}
    }

    Ok(())
}
