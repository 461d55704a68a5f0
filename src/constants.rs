//! Application constants for the Blue Bank TUI.
//!
//! Identifiers, user-facing labels, and the tuning values that drive
//! scrolling, the pull-up sheet, and the small entrance animations.

use std::time::Duration;

// ============================================================================
// Identifiers
// ============================================================================

/// Navigation identifier of the home tab (the only tab with real content).
pub const HOME_TAB_ID: &str = "home";

/// Application name used for config and data directories.
pub const APP_NAME: &str = "bluebank";

// ============================================================================
// Display Strings
// ============================================================================

/// Currency label appended to every amount.
pub const CURRENCY_LABEL: &str = "ریال";

/// Fixed-width string shown instead of the balance when it is hidden.
pub const MASKED_BALANCE: &str = "••••••••";

/// Title shown in the header's top bar.
pub const HOME_TITLE: &str = "خانه";

/// Label next to the balance visibility toggle.
pub const BALANCE_LABEL: &str = "موجودی";

/// Label under the report action button.
pub const REPORT_LABEL: &str = "گزارش مالی";

/// Label under the top-up action button.
pub const TOP_UP_LABEL: &str = "شارژ حساب";

/// Text of the placeholder view shown for every tab except home.
pub const PLACEHOLDER_TEXT: &str = "صفحه در حال توسعه";

/// Suffix used in toasts for actions that have no flow yet.
pub const IN_DEVELOPMENT: &str = "در حال توسعه";

// ============================================================================
// Pull-up Sheet
// ============================================================================

/// How much of the scroll offset is subtracted from the sheet's base offset.
pub const SCROLL_SLIDE_FACTOR: f32 = 0.5;

/// Default base offset of the sheet slide.
///
/// With a zero base the slide is always clamped to zero. Kept as-is; the
/// `sheet_initial_offset` config key can raise it.
pub const DEFAULT_SHEET_INITIAL_OFFSET: f32 = 0.0;

// ============================================================================
// Timing
// ============================================================================

/// Default interval between redraw ticks, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Lower bound for the configured tick rate.
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Default number of ticks a toast stays on screen.
pub const DEFAULT_TOAST_TICKS: u8 = 20;

/// Default rows scrolled per wheel notch or arrow key.
pub const DEFAULT_SCROLL_STEP: u16 = 1;

/// Delay between the entrance of consecutive transaction rows, in ticks.
pub const ROW_REVEAL_DELAY_TICKS: u64 = 1;

/// Duration of a single transaction row's fade-in, in ticks.
pub const ROW_REVEAL_TICKS: u64 = 5;

/// Duration of the fade-in of a freshly mounted view, in ticks.
pub const VIEW_FADE_TICKS: u64 = 3;

/// Converts a millisecond tick rate into a `Duration`, honouring the minimum.
#[must_use]
pub fn tick_rate(ms: u64) -> Duration {
    Duration::from_millis(ms.max(MIN_TICK_RATE_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_is_clamped() {
        assert_eq!(tick_rate(0), Duration::from_millis(MIN_TICK_RATE_MS));
        assert_eq!(tick_rate(250), Duration::from_millis(250));
    }
}
