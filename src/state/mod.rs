//! State management module for the Blue Bank TUI application.
//!
//! The state is split into small pieces owned by the top-level [`App`]:
//!
//! - [`UiState`] - Session presentation state (balance visibility, tab, toast)
//! - [`Viewport`] - Page scroll offset and its subscriptions
//! - [`SheetState`] - The mounted transaction sheet
//! - [`AppConfig`] - Read-only configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                        App                          │
//! ├────────────┬──────────────┬────────────┬────────────┤
//! │  Dataset   │   UiState    │  Viewport  │ SheetState │
//! │ - balance  │ - visible    │ - offset   │ - scroll   │
//! │ - txns     │ - active tab │ - max      │   subscr.  │
//! │ - nav      │ - toast      │            │            │
//! └────────────┴──────────────┴────────────┴────────────┘
//! ```
//!
//! Child views only ever read this state; input becomes an
//! [`AppCommand`](crate::commands::AppCommand) executed by the app.

use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::domain::Dataset;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;

pub mod config;
pub mod scroll;
pub mod sheet;
pub mod ui_state;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use scroll::Viewport;
pub use sheet::SheetState;
pub use ui_state::{ContentView, UiState};

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Dataset file to load instead of the demo data.
    pub data_file: Option<PathBuf>,
    /// Navigation item to open first.
    pub tab: Option<String>,
    /// Start with the balance masked.
    pub hide_balance: bool,
}

// ============================================================================
// App
// ============================================================================

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Static account data shown on screen.
    pub data: Dataset,
    /// Presentation state.
    pub ui: UiState,
    /// The mounted transaction sheet, present while the home tab is active.
    pub sheet: Option<SheetState>,
    /// Scroll position of the page.
    pub viewport: Viewport,
    /// Read-only configuration.
    pub config: AppConfig,
    /// Last known terminal area.
    pub screen: Rect,
    /// Set when the app should exit.
    pub exit: bool,
    /// Counter advanced on every tick, drives entrance animations.
    pub animation_tick: u64,
    view_mounted_at: u64,
}

impl App {
    /// Height of the active content view, in rows.
    #[must_use]
    pub fn content_height(&self) -> u16 {
        match self.ui.content_view() {
            ContentView::Transactions => {
                crate::ui::layout::sheet_content_height(self.data.transactions.len())
            }
            ContentView::Placeholder => 0,
        }
    }

    /// Current slide of the transaction sheet, zero when it is not mounted.
    #[must_use]
    pub fn sheet_slide(&self) -> u16 {
        self.sheet.as_ref().map_or(0, SheetState::slide)
    }

    /// Ticks since the active content view was mounted.
    #[must_use]
    pub fn view_elapsed_ticks(&self) -> u64 {
        match &self.sheet {
            Some(sheet) => sheet.ticks_since_mount(self.animation_tick),
            None => self.animation_tick.saturating_sub(self.view_mounted_at),
        }
    }
}
