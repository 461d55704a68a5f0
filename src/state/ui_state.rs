//! UI state management for the Blue Bank TUI.
//!
//! Session-only presentation state: balance visibility, the active tab, and
//! the transient toast. Nothing here is persisted.

use crate::constants::HOME_TAB_ID;

// ============================================================================
// Content View
// ============================================================================

/// What the area between the header and the navigation bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    /// The pull-up transaction sheet (home tab).
    Transactions,
    /// The inert "under development" page (every other tab).
    Placeholder,
}

impl ContentView {
    /// Selects the view for a navigation identifier.
    #[must_use]
    pub fn for_tab(tab_id: &str) -> Self {
        if tab_id == HOME_TAB_ID {
            Self::Transactions
        } else {
            Self::Placeholder
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Presentation state owned by the top-level [`App`](super::App).
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.toggle_balance();
/// ui.select_tab("cards");
/// assert_eq!(ui.content_view(), ContentView::Placeholder);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Whether the balance figure is shown or masked.
    pub balance_visible: bool,
    /// Identifier of the selected navigation item.
    pub active_tab: String,
    /// Toast message and its remaining lifetime in ticks.
    pub toast: Option<(String, u8)>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            balance_visible: true,
            active_tab: HOME_TAB_ID.to_string(),
            toast: None,
        }
    }
}

impl UiState {
    /// Creates the default state: balance visible, home tab active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips balance visibility and returns the new value.
    pub fn toggle_balance(&mut self) -> bool {
        self.balance_visible = !self.balance_visible;
        self.balance_visible
    }

    /// Makes `tab_id` the active tab. Returns `true` if it changed.
    pub fn select_tab(&mut self, tab_id: &str) -> bool {
        if self.active_tab == tab_id {
            return false;
        }
        self.active_tab = tab_id.to_string();
        true
    }

    /// The view selected by the active tab.
    #[must_use]
    pub fn content_view(&self) -> ContentView {
        ContentView::for_tab(&self.active_tab)
    }

    /// Shows a toast notification that auto-dismisses after `ticks` ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
