//! Layout calculations for the Blue Bank TUI.
//!
//! The screen is a single centered column, like a phone on a desktop:
//!
//! ```text
//! ┌──────────── column ────────────┐
//! │ page (scrolls)                 │  header, then the sheet or placeholder
//! │                                │
//! ├────────────────────────────────┤
//! │ footer (fixed navigation bar)  │
//! └────────────────────────────────┘
//! ```
//!
//! The page is taller than its viewport: the header sits at the top and the
//! content view starts one row before the header ends, overlapping it. All
//! page geometry here is in page coordinates (row 0 is the top of the header).

use ratatui::layout::{Constraint, Layout, Position, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Widest the app column gets on large terminals.
pub const MAX_APP_WIDTH: u16 = 64;

/// Height of the header area in rows.
pub const HEADER_HEIGHT: u16 = 12;

/// Rows of the header covered by the top edge of the content view.
pub const SHEET_OVERLAP: u16 = 1;

/// Height of the navigation bar.
pub const FOOTER_HEIGHT: u16 = 3;

/// Rows above the first transaction: edge, handle, gap.
pub const SHEET_LEAD_ROWS: u16 = 3;

/// Height of each transaction item in the sheet.
pub const TXN_HEIGHT: u16 = 2;

/// Height of the divider between transaction items.
pub const DIVIDER_HEIGHT: u16 = 1;

/// Blank rows under the last transaction.
pub const SHEET_BOTTOM_PADDING: u16 = 1;

/// Horizontal padding inside the sheet.
pub const CONTENT_PADDING_X: u16 = 1;

/// Width of the amount column of a transaction row.
pub const AMOUNT_WIDTH: u16 = 20;

/// Width of the icon circle of a transaction row.
pub const ICON_WIDTH: u16 = 5;

/// Width of an action button in the header.
pub const ACTION_BUTTON_WIDTH: u16 = 7;

/// Height of an action button in the header.
pub const ACTION_BUTTON_HEIGHT: u16 = 3;

// Header rows, relative to the top of the header.
const TOP_BAR_ROW: u16 = 1;
const BALANCE_ROW: u16 = 3;
const TOGGLE_ROW: u16 = 4;
const BUTTONS_ROW: u16 = 6;
const BUTTON_LABELS_ROW: u16 = BUTTONS_ROW + ACTION_BUTTON_HEIGHT;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// The centered app column.
    pub column: Rect,
    /// Scrolling page viewport.
    pub page: Rect,
    /// Fixed navigation bar.
    pub footer: Rect,
}

/// Areas inside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Icon buttons and the screen title.
    pub top_bar: Rect,
    /// The balance figure.
    pub balance: Rect,
    /// The clickable "balance" label with the eye icon.
    pub toggle: Rect,
    /// Financial report button.
    pub report_button: Rect,
    /// Top-up button.
    pub top_up_button: Rect,
    /// Label under the report button.
    pub report_label: Rect,
    /// Label under the top-up button.
    pub top_up_label: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A navigation item, by position.
    Tab(usize),
    /// The balance visibility toggle.
    BalanceToggle,
    /// The financial report button.
    Report,
    /// The top-up button.
    TopUp,
    /// Nothing interactive.
    Nothing,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn app_layout(screen: Rect) -> AppLayout {
    let width = screen.width.min(MAX_APP_WIDTH);
    let x = screen.x + (screen.width - width) / 2;
    let column = Rect::new(x, screen.y, width, screen.height);

    let [page, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(column);

    AppLayout {
        column,
        page,
        footer,
    }
}

/// First page row of the content view (sheet or placeholder).
#[must_use]
pub const fn sheet_top() -> u16 {
    HEADER_HEIGHT - SHEET_OVERLAP
}

/// Rows needed to show every transaction in the sheet.
#[must_use]
pub fn sheet_content_height(txn_count: usize) -> u16 {
    let count = u16::try_from(txn_count).unwrap_or(u16::MAX);
    SHEET_LEAD_ROWS
        .saturating_add(count.saturating_mul(TXN_HEIGHT))
        .saturating_add(count.saturating_sub(1).saturating_mul(DIVIDER_HEIGHT))
        .saturating_add(SHEET_BOTTOM_PADDING)
}

/// Total page height. The content view is at least one viewport tall.
#[must_use]
pub fn page_height(content_height: u16, viewport_height: u16) -> u16 {
    sheet_top().saturating_add(content_height.max(viewport_height))
}

/// Largest scroll offset for a page.
#[must_use]
pub fn max_scroll(content_height: u16, viewport_height: u16) -> u16 {
    page_height(content_height, viewport_height).saturating_sub(viewport_height)
}

/// Largest scroll offset when the content view is pushed down by a slide
/// that itself shrinks as the page scrolls.
///
/// The result is the smallest offset at which the slid page bottom is in view.
#[must_use]
pub fn max_scroll_with_slide(
    content_height: u16,
    viewport_height: u16,
    slide_at: impl Fn(u16) -> u16,
) -> u16 {
    let base = max_scroll(content_height, viewport_height);
    let mut offset = base;
    while offset < u16::MAX && offset < base.saturating_add(slide_at(offset)) {
        offset += 1;
    }
    offset
}

/// Calculate the areas inside the header.
#[must_use]
pub fn header_layout(area: Rect) -> HeaderLayout {
    let row = |offset: u16, height: u16| {
        let y = area.y.saturating_add(offset);
        let bottom = area.bottom();
        Rect::new(area.x, y.min(bottom), area.width, height.min(bottom.saturating_sub(y)))
    };

    let buttons = row(BUTTONS_ROW, ACTION_BUTTON_HEIGHT);
    let labels = row(BUTTON_LABELS_ROW, 1);
    let [report_half, top_up_half] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(buttons);

    let button_in = |half: Rect| {
        let width = ACTION_BUTTON_WIDTH.min(half.width);
        Rect::new(half.x + (half.width - width) / 2, half.y, width, half.height)
    };
    let label_under = |half: Rect| Rect::new(half.x, labels.y, half.width, labels.height);

    HeaderLayout {
        top_bar: row(TOP_BAR_ROW, 1),
        balance: row(BALANCE_ROW, 1),
        toggle: row(TOGGLE_ROW, 1),
        report_button: button_in(report_half),
        top_up_button: button_in(top_up_half),
        report_label: label_under(report_half),
        top_up_label: label_under(top_up_half),
    }
}

/// Area of the `index`-th transaction item inside a sheet.
#[must_use]
pub fn txn_row_area(sheet: Rect, index: usize) -> Rect {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    let y = sheet
        .y
        .saturating_add(SHEET_LEAD_ROWS)
        .saturating_add(index.saturating_mul(TXN_HEIGHT + DIVIDER_HEIGHT));
    let width = sheet.width.saturating_sub(CONTENT_PADDING_X * 2);
    Rect::new(sheet.x + CONTENT_PADDING_X.min(sheet.width), y, width, TXN_HEIGHT)
}

/// Evenly split the navigation bar between `count` items.
#[must_use]
pub fn footer_item_areas(footer: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let share = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::horizontal(vec![Constraint::Ratio(1, share); count])
        .split(footer)
        .to_vec()
}

/// Resolve a click at a screen position.
///
/// # Arguments
///
/// * `screen` - The terminal area
/// * `scroll_offset` - Current page scroll offset
/// * `sheet_slide` - Current slide of the content view
/// * `nav_count` - Number of navigation items
/// * `position` - Clicked cell
#[must_use]
pub fn hit_test(
    screen: Rect,
    scroll_offset: u16,
    sheet_slide: u16,
    nav_count: usize,
    position: Position,
) -> HitTarget {
    let layout = app_layout(screen);

    if layout.footer.contains(position) {
        return footer_item_areas(layout.footer, nav_count)
            .iter()
            .position(|area| area.contains(position))
            .map_or(HitTarget::Nothing, HitTarget::Tab);
    }

    if !layout.page.contains(position) {
        return HitTarget::Nothing;
    }

    let page_pos = Position::new(
        position.x - layout.page.x,
        (position.y - layout.page.y).saturating_add(scroll_offset),
    );
    if page_pos.y >= sheet_top().saturating_add(sheet_slide) {
        return HitTarget::Nothing;
    }

    let header = header_layout(Rect::new(0, 0, layout.page.width, HEADER_HEIGHT));
    if header.toggle.contains(page_pos) {
        HitTarget::BalanceToggle
    } else if header.report_button.contains(page_pos) {
        HitTarget::Report
    } else if header.top_up_button.contains(page_pos) {
        HitTarget::TopUp
    } else {
        HitTarget::Nothing
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_centers_column_on_wide_screens() {
        let layout = app_layout(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.column.width, MAX_APP_WIDTH);
        assert_eq!(layout.column.x, 18);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.page.height, 40 - FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 40 - FOOTER_HEIGHT);
    }

    #[test]
    fn test_app_layout_fills_narrow_screens() {
        let layout = app_layout(Rect::new(0, 0, 40, 30));
        assert_eq!(layout.column, Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_sheet_content_height() {
        assert_eq!(sheet_content_height(0), SHEET_LEAD_ROWS + SHEET_BOTTOM_PADDING);
        assert_eq!(sheet_content_height(1), 3 + 2 + 1);
        // 6 rows of 2, 5 dividers
        assert_eq!(sheet_content_height(6), 3 + 12 + 5 + 1);
        assert_eq!(sheet_content_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_page_is_at_least_header_plus_viewport() {
        assert_eq!(page_height(5, 30), sheet_top() + 30);
        assert_eq!(page_height(50, 30), sheet_top() + 50);
        assert_eq!(max_scroll(5, 30), sheet_top());
        assert_eq!(max_scroll(50, 30), sheet_top() + 20);
    }

    #[test]
    fn test_max_scroll_reaches_slid_bottom() {
        assert_eq!(max_scroll_with_slide(50, 30, |_| 0), max_scroll(50, 30));

        // A constant slide adds its rows to the range.
        assert_eq!(max_scroll_with_slide(50, 30, |_| 4), max_scroll(50, 30) + 4);

        // Content 21, viewport 20: base 12. The slide 10 - offset / 2 settles at 15.
        let slide = |offset: u16| (10.0 - f32::from(offset) * 0.5).max(0.0).round() as u16;
        assert_eq!(max_scroll_with_slide(21, 20, slide), 15);
    }

    #[test]
    fn test_header_layout_rows() {
        let header = header_layout(Rect::new(0, 0, 60, HEADER_HEIGHT));

        assert_eq!(header.top_bar.y, 1);
        assert_eq!(header.balance.y, 3);
        assert_eq!(header.toggle, Rect::new(0, 4, 60, 1));
        assert_eq!(header.report_button.height, ACTION_BUTTON_HEIGHT);
        assert_eq!(header.report_button.width, ACTION_BUTTON_WIDTH);
        assert!(header.report_button.right() <= 30);
        assert!(header.top_up_button.x >= 30);
        assert_eq!(header.report_label.y, BUTTON_LABELS_ROW);
        assert!(header.top_up_label.bottom() <= HEADER_HEIGHT);
    }

    #[test]
    fn test_header_layout_clips_to_short_areas() {
        let header = header_layout(Rect::new(0, 0, 20, 4));
        assert_eq!(header.toggle.height, 0);
        assert_eq!(header.report_button.height, 0);
    }

    #[test]
    fn test_txn_row_area() {
        let sheet = Rect::new(0, 11, 40, 30);
        assert_eq!(txn_row_area(sheet, 0), Rect::new(1, 14, 38, TXN_HEIGHT));
        assert_eq!(txn_row_area(sheet, 2).y, 14 + 2 * 3);
    }

    #[test]
    fn test_footer_item_areas_cover_footer() {
        let footer = Rect::new(0, 37, 50, FOOTER_HEIGHT);
        let areas = footer_item_areas(footer, 5);

        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0].x, 0);
        assert_eq!(areas[4].right(), 50);
        assert!(footer_item_areas(footer, 0).is_empty());
    }

    #[test]
    fn test_hit_test_footer_items() {
        let screen = Rect::new(0, 0, 50, 40);
        let footer_y = 40 - FOOTER_HEIGHT + 1;

        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(1, footer_y)),
            HitTarget::Tab(0)
        );
        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(49, footer_y)),
            HitTarget::Tab(4)
        );
    }

    #[test]
    fn test_hit_test_header_controls() {
        let screen = Rect::new(0, 0, 60, 40);
        let header = header_layout(Rect::new(0, 0, 60, HEADER_HEIGHT));

        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(3, header.toggle.y)),
            HitTarget::BalanceToggle
        );
        assert_eq!(
            hit_test(
                screen,
                0,
                0,
                5,
                Position::new(header.report_button.x + 1, header.report_button.y + 1)
            ),
            HitTarget::Report
        );
        assert_eq!(
            hit_test(
                screen,
                0,
                0,
                5,
                Position::new(header.top_up_button.x, header.top_up_button.y)
            ),
            HitTarget::TopUp
        );
        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(0, header.balance.y)),
            HitTarget::Nothing
        );
    }

    #[test]
    fn test_hit_test_follows_scroll() {
        let screen = Rect::new(0, 0, 60, 40);
        let toggle_y = header_layout(Rect::new(0, 0, 60, HEADER_HEIGHT)).toggle.y;

        // Scrolled by 2, the toggle row is drawn two rows higher.
        assert_eq!(
            hit_test(screen, 2, 0, 5, Position::new(3, toggle_y - 2)),
            HitTarget::BalanceToggle
        );
        // Scrolled past the header, the same cell is inside the sheet.
        assert_eq!(
            hit_test(screen, sheet_top(), 0, 5, Position::new(3, toggle_y)),
            HitTarget::Nothing
        );
    }

    #[test]
    fn test_hit_test_sheet_covers_header_when_slid() {
        let screen = Rect::new(0, 0, 60, 40);
        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(3, sheet_top())),
            HitTarget::Nothing
        );
    }

    #[test]
    fn test_hit_test_outside_column() {
        let screen = Rect::new(0, 0, 100, 40);
        assert_eq!(
            hit_test(screen, 0, 0, 5, Position::new(2, 4)),
            HitTarget::Nothing
        );
    }
}
