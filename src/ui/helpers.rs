//! UI helper functions shared by the header, sheet, and placeholder views.
//!
//! This module provides reusable drawing helpers:
//! - Vertical gradients and flat fills
//! - The rounded top edge of the content views
//! - Bordered action buttons
//! - Copying a window of the offscreen page into the frame

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::DIVIDER;
use crate::widgets::helpers::lerp_color;

// ============================================================================
// Fills
// ============================================================================

/// Paint a vertical gradient from `top` to `bottom` behind `area`.
pub fn fill_gradient(buf: &mut Buffer, area: Rect, top: Color, bottom: Color) {
    let last = area.height.saturating_sub(1).max(1);
    for row in 0..area.height {
        let color = lerp_color(top, bottom, f32::from(row) / f32::from(last));
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        buf.set_style(line.intersection(buf.area), Style::new().bg(color));
    }
}

/// Paint a flat background behind `area`.
pub fn fill(buf: &mut Buffer, area: Rect, color: Color) {
    buf.set_style(area.intersection(buf.area), Style::new().bg(color));
}

/// Draw the rounded top edge of a surface on the first row of `area`.
///
/// ```text
/// ╭──────────────╮
/// ```
pub fn render_rounded_edge(buf: &mut Buffer, area: Rect, surface: Color) {
    if area.width < 2 || area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y, area.width, 1);
    let style = Style::new().fg(DIVIDER).bg(surface);
    let middle = border::ROUNDED
        .horizontal_top
        .repeat(usize::from(area.width - 2));
    let edge = format!(
        "{}{middle}{}",
        border::ROUNDED.top_left,
        border::ROUNDED.top_right
    );
    buf.set_string(row.x, row.y, edge, style);
}

/// Draw a horizontal divider across the first row of `area`.
pub fn render_divider(buf: &mut Buffer, area: Rect, color: Color) {
    if area.height == 0 {
        return;
    }
    let line = border::PLAIN.horizontal_top.repeat(usize::from(area.width));
    buf.set_string(area.x, area.y, line, Style::new().fg(color));
}

// ============================================================================
// Buttons
// ============================================================================

/// Creates the rounded block of a header action button.
///
/// # Arguments
///
/// * `background` - Button fill color
/// * `border_color` - Color of the rounded outline
#[must_use]
pub fn create_button_block(background: Color, border_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(border_color))
        .style(Style::new().bg(background))
}

// ============================================================================
// Page Blitting
// ============================================================================

/// Copy the rows of `page` starting at `scroll` into `dest` of `target`.
///
/// Rows past the end of the page are left untouched.
pub fn blit(page: &Buffer, scroll: u16, dest: Rect, target: &mut Buffer) {
    let source = page.area;
    let width = dest.width.min(source.width);

    for row in 0..dest.height {
        let src_y = source.y.saturating_add(scroll).saturating_add(row);
        if src_y >= source.bottom() {
            break;
        }
        for col in 0..width {
            let Some(cell) = page.cell((source.x + col, src_y)) else {
                continue;
            };
            if let Some(slot) = target.cell_mut((dest.x + col, dest.y + row)) {
                *slot = cell.clone();
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
