//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`] values by [`KeyMapper`], a
//! pure function that can be tested in isolation. The app then executes
//! commands against its state; mouse input produces the same commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,

    // === Header ===
    /// Show or hide the balance figure.
    ToggleBalance,
    /// Press the top-up button.
    TopUp,
    /// Press the financial report button.
    Report,

    // === Navigation Bar ===
    /// Select the next navigation item, wrapping around.
    NextTab,
    /// Select the previous navigation item, wrapping around.
    PreviousTab,
    /// Select the navigation item at a position.
    SelectTabAt(usize),

    // === Page Scrolling ===
    /// Scroll the page up by one step.
    ScrollUp,
    /// Scroll the page down by one step.
    ScrollDown,
    /// Scroll the page up by a screen.
    PageUp,
    /// Scroll the page down by a screen.
    PageDown,
    /// Scroll to the top of the page.
    ScrollToTop,
    /// Scroll to the bottom of the page.
    ScrollToBottom,

    // === No Operation ===
    /// No action to perform (unhandled input).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command moves the page.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppCommand::Quit,
                _ => AppCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            KeyCode::Char('b') | KeyCode::Char(' ') => AppCommand::ToggleBalance,
            KeyCode::Char('t') => AppCommand::TopUp,
            KeyCode::Char('r') => AppCommand::Report,
            KeyCode::Tab | KeyCode::Right => AppCommand::NextTab,
            KeyCode::BackTab | KeyCode::Left => AppCommand::PreviousTab,
            KeyCode::Char(c @ '1'..='9') => {
                AppCommand::SelectTabAt(c as usize - '1' as usize)
            }
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollDown,
            KeyCode::PageUp => AppCommand::PageUp,
            KeyCode::PageDown => AppCommand::PageDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::ScrollToTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::ScrollToBottom,
            _ => AppCommand::Noop,
        }
    }
}

/// Convenience wrapper around [`KeyMapper::map_key`].
#[must_use]
pub fn map_key(key: KeyEvent) -> AppCommand {
    KeyMapper::map_key(key)
}

// ============================================================================
// Tests
// ============================================================================
