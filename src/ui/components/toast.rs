//! Toast notification component.
//!
//! Provides a non-blocking toast overlay centered just above the navigation
//! bar. Used for actions that exist on screen but have no flow yet.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{NAVY, NAVY_OVERLAY, ON_NAVY};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Vertical gap between the toast and the bottom of its area.
const TOAST_PADDING_BOTTOM: u16 = 1;

/// Extra padding added to message width for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification at the bottom center of `area`.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render into
/// * `area` - The area within which to position the toast
/// * `message` - The message text to display
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(Line::from(Span::styled(
        message,
        Style::new().fg(ON_NAVY),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Calculates the position and dimensions of the toast.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_width = u16::try_from(Line::from(message).width()).unwrap_or(u16::MAX);
    let toast_width = message_width
        .saturating_add(TOAST_WIDTH_PADDING)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + (area.width - toast_width) / 2;
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

/// Creates the styled block for the toast notification.
#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(NAVY_OVERLAY))
        .style(Style::new().bg(NAVY))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_calculate_toast_position_variants() {
        struct TestCase {
            name: &'static str,
            area: Rect,
            message: &'static str,
            expected: Rect,
        }

        let cases = [
            TestCase {
                name: "short message uses minimum width",
                area: Rect::new(0, 0, 60, 30),
                message: "Hi",
                expected: Rect::new(20, 26, MIN_TOAST_WIDTH, TOAST_HEIGHT),
            },
            TestCase {
                name: "long message grows",
                area: Rect::new(0, 0, 60, 30),
                message: "a message that is longer than twenty",
                expected: Rect::new(10, 26, 40, TOAST_HEIGHT),
            },
            TestCase {
                name: "clamped to a narrow area",
                area: Rect::new(5, 0, 12, 30),
                message: "Test",
                expected: Rect::new(5, 26, 12, TOAST_HEIGHT),
            },
            TestCase {
                name: "short area",
                area: Rect::new(0, 0, 40, 2),
                message: "Test",
                expected: Rect::new(10, 0, MIN_TOAST_WIDTH, 2),
            },
        ];

        for case in &cases {
            assert_eq!(
                calculate_toast_position(case.area, case.message),
                case.expected,
                "{}",
                case.name
            );
        }
    }

    #[test]
    fn test_toast_renders_message_on_navy() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_toast(frame, area, "شارژ حساب در حال توسعه");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_to_string(buffer).contains("شارژ حساب در حال توسعه"));

        let toast = calculate_toast_position(Rect::new(0, 0, 40, 10), "شارژ حساب در حال توسعه");
        assert_eq!(buffer[(toast.x + 1, toast.y + 1)].bg, NAVY);
    }
}
