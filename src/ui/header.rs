//! Header rendering for the Blue Bank TUI.
//!
//! The header is the navy block at the top of the page: a bar of icon buttons
//! around the screen title, the balance with its visibility toggle, and the
//! two action buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::constants::{BALANCE_LABEL, HOME_TITLE, REPORT_LABEL, TOP_UP_LABEL};
use crate::theme::{
    BALANCE_CURRENCY_STYLE, HEADER_TITLE_STYLE, NAVY, NAVY_LIGHT, NAVY_OVERLAY, ON_NAVY, YELLOW,
};
use crate::widgets::BalanceDisplay;

use super::helpers::{create_button_block, fill_gradient};
use super::layout::header_layout;

// ============================================================================
// Glyphs
// ============================================================================

const LEFT_ICONS: &str = "(?) (!)";
const RIGHT_ICONS: &str = "(☺) (⌕)";
const EYE_OPEN: &str = "◉";
const EYE_CLOSED: &str = "◌";
const REPORT_GLYPH: &str = "▥";
const TOP_UP_GLYPH: &str = "+";

// ============================================================================
// HeaderView Widget
// ============================================================================

/// The page header. Stateless; everything it shows is passed in.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView {
    balance: i64,
    balance_visible: bool,
}

impl HeaderView {
    /// Create a header for the given balance.
    #[must_use]
    pub const fn new(balance: i64, balance_visible: bool) -> Self {
        Self {
            balance,
            balance_visible,
        }
    }

    /// The toggle row: label followed by an open or closed eye.
    #[must_use]
    pub fn toggle_line(&self) -> Line<'static> {
        let eye = if self.balance_visible {
            EYE_OPEN
        } else {
            EYE_CLOSED
        };
        Line::from(vec![
            Span::styled(BALANCE_LABEL, BALANCE_CURRENCY_STYLE),
            Span::raw(" "),
            Span::styled(eye, Style::new().fg(YELLOW)),
        ])
    }
}

impl Widget for HeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        fill_gradient(buf, area, NAVY, NAVY_LIGHT);

        let layout = header_layout(area);
        let icon_style = Style::new().fg(ON_NAVY);

        let bar = layout.top_bar.inner(Margin::new(1, 0));
        Line::from(Span::styled(LEFT_ICONS, icon_style))
            .alignment(Alignment::Left)
            .render(bar, buf);
        Line::from(Span::styled(HOME_TITLE, HEADER_TITLE_STYLE))
            .alignment(Alignment::Center)
            .render(bar, buf);
        Line::from(Span::styled(RIGHT_ICONS, icon_style))
            .alignment(Alignment::Right)
            .render(bar, buf);

        BalanceDisplay::new(self.balance, self.balance_visible).render(layout.balance, buf);
        self.toggle_line()
            .alignment(Alignment::Center)
            .render(layout.toggle, buf);

        render_button(
            buf,
            layout.report_button,
            REPORT_GLYPH,
            create_button_block(NAVY_OVERLAY, NAVY_OVERLAY),
            Style::new().fg(ON_NAVY),
        );
        render_button(
            buf,
            layout.top_up_button,
            TOP_UP_GLYPH,
            create_button_block(YELLOW, YELLOW),
            Style::new().fg(NAVY),
        );

        Line::from(Span::styled(REPORT_LABEL, icon_style))
            .alignment(Alignment::Center)
            .render(layout.report_label, buf);
        Line::from(Span::styled(TOP_UP_LABEL, icon_style))
            .alignment(Alignment::Center)
            .render(layout.top_up_label, buf);
    }
}

fn render_button(
    buf: &mut Buffer,
    area: Rect,
    glyph: &'static str,
    block: Block<'static>,
    glyph_style: Style,
) {
    if area.is_empty() {
        return;
    }
    let inner = block.inner(area);
    block.render(area, buf);
    Line::from(Span::styled(glyph, glyph_style))
        .alignment(Alignment::Center)
        .render(inner, buf);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MASKED_BALANCE;
    use crate::test_utils::buffer_to_string;
    use crate::ui::layout::HEADER_HEIGHT;

    fn render_header(balance: i64, visible: bool) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, HEADER_HEIGHT));
        HeaderView::new(balance, visible).render(buf.area, &mut buf);
        buf
    }

    /// Tests the header shows every fixed label and the formatted balance.
    #[test]
    fn test_header_shows_labels_and_balance() {
        let content = buffer_to_string(&render_header(2_253_623, true));

        for expected in [
            HOME_TITLE,
            "۲,۲۵۳,۶۲۳ ریال",
            BALANCE_LABEL,
            REPORT_LABEL,
            TOP_UP_LABEL,
            EYE_OPEN,
            LEFT_ICONS,
            RIGHT_ICONS,
        ] {
            assert!(
                content.contains(expected),
                "Header should contain '{expected}', got:\n{content}"
            );
        }
    }

    #[test]
    fn test_hidden_balance_is_masked() {
        let content = buffer_to_string(&render_header(2_253_623, false));

        assert!(content.contains(&format!("{MASKED_BALANCE} ریال")));
        assert!(!content.contains("۲,۲۵۳,۶۲۳"));
        assert!(content.contains(EYE_CLOSED));
    }

    #[test]
    fn test_header_background_is_navy_gradient() {
        let buf = render_header(0, true);
        assert_eq!(buf[(0, 0)].bg, NAVY);
        assert_eq!(buf[(0, HEADER_HEIGHT - 1)].bg, NAVY_LIGHT);
    }

    #[test]
    fn test_top_up_button_is_yellow() {
        let buf = render_header(0, true);
        let button = header_layout(buf.area).top_up_button;
        assert_eq!(buf[(button.x + 1, button.y + 1)].bg, YELLOW);
        assert_eq!(
            buf[(button.x + button.width / 2, button.y + 1)].symbol(),
            TOP_UP_GLYPH
        );
    }

    #[test]
    fn test_header_survives_tiny_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        HeaderView::new(1, true).render(buf.area, &mut buf);
    }
}
