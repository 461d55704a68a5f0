//! Theme and styling constants for the Blue Bank TUI.
//!
//! Deep navy header, yellow accents, and light surfaces for the sheet and
//! navigation bar.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Deep navy - header background and primary text.
pub const NAVY: Color = Color::Rgb(26, 40, 71);

/// Lighter navy at the bottom of the header gradient.
pub const NAVY_LIGHT: Color = Color::Rgb(36, 58, 94);

/// Yellow accent for the top-up button and the active tab.
pub const YELLOW: Color = Color::Rgb(212, 168, 67);

/// White translucent overlay on navy, used by the report button.
pub const NAVY_OVERLAY: Color = Color::Rgb(60, 72, 98);

/// Plain white surface (app column, placeholder, footer).
pub const SURFACE: Color = Color::Rgb(255, 255, 255);

/// Off-white background of the transaction sheet.
pub const SHEET_BG: Color = Color::Rgb(245, 245, 245);

/// Neutral gray around the app column on wide terminals.
pub const DESKTOP_BG: Color = Color::Rgb(232, 232, 232);

/// Secondary text and inactive tab color.
pub const TEXT_SECONDARY: Color = Color::Rgb(107, 114, 128);

/// Muted text for timestamps.
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

/// Divider lines and the sheet edge.
pub const DIVIDER: Color = Color::Rgb(229, 231, 235);

/// The drag handle at the top of the sheet.
pub const HANDLE: Color = Color::Rgb(209, 213, 219);

/// Circle behind transaction icons.
pub const ICON_BG: Color = Color::Rgb(243, 244, 246);

/// Highlight behind credit amounts.
pub const CREDIT_BG: Color = Color::Rgb(254, 243, 199);

/// White foreground on the header.
pub const ON_NAVY: Color = Color::Rgb(255, 255, 255);

// ============================================================================
// Style Constants
// ============================================================================

/// Header title in the top bar.
pub const HEADER_TITLE_STYLE: Style = Style::new().fg(ON_NAVY).add_modifier(Modifier::BOLD);

/// Balance figure in the header.
pub const BALANCE_STYLE: Style = Style::new().fg(ON_NAVY).add_modifier(Modifier::BOLD);

/// Currency label next to the balance.
pub const BALANCE_CURRENCY_STYLE: Style = Style::new().fg(ON_NAVY);

/// Transaction title in the sheet.
pub const TXN_TITLE_STYLE: Style = Style::new().fg(NAVY).add_modifier(Modifier::BOLD);

/// Time and date under a transaction title.
pub const TXN_META_STYLE: Style = Style::new().fg(TEXT_MUTED);

/// Debit amounts.
pub const DEBIT_STYLE: Style = Style::new().fg(NAVY).add_modifier(Modifier::BOLD);

/// Credit amounts, highlighted.
pub const CREDIT_STYLE: Style = Style::new()
    .fg(NAVY)
    .bg(CREDIT_BG)
    .add_modifier(Modifier::BOLD);

/// Active navigation item.
pub const ACTIVE_TAB_STYLE: Style = Style::new().fg(YELLOW).add_modifier(Modifier::BOLD);

/// Inactive navigation item.
pub const INACTIVE_TAB_STYLE: Style = Style::new().fg(TEXT_SECONDARY);
