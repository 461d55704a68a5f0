//! The view shown for every tab except home.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::{PLACEHOLDER_TEXT, VIEW_FADE_TICKS};
use crate::theme::{SURFACE, TEXT_SECONDARY};
use crate::widgets::helpers::{fade, reveal_progress};

use super::helpers::{fill, render_rounded_edge};

/// A blank surface with a centered "under development" notice.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderView {
    elapsed_ticks: u64,
}

impl PlaceholderView {
    #[must_use]
    pub const fn new(elapsed_ticks: u64) -> Self {
        Self { elapsed_ticks }
    }
}

impl Widget for PlaceholderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        fill(buf, area, SURFACE);
        render_rounded_edge(buf, area, SURFACE);

        let opacity = reveal_progress(self.elapsed_ticks, 0, VIEW_FADE_TICKS);
        let style = Style::new().fg(fade(TEXT_SECONDARY, SURFACE, opacity));
        let text = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Line::from(Span::styled(PLACEHOLDER_TEXT, style))
            .alignment(Alignment::Center)
            .render(text, buf);
    }
}
