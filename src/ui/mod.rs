//! UI rendering module for the Blue Bank TUI.
//!
//! This module provides the main rendering entry point. The page (header plus
//! the active content view) is drawn into an offscreen buffer as tall as the
//! whole page, then the window at the current scroll offset is copied into
//! the frame. The navigation bar and toast are drawn on top, unscrolled.
//!
//! # Module Structure
//!
//! - `layout` - Layout calculations, page geometry and mouse hit testing
//! - `header` - Navy header with balance and action buttons
//! - `sheet` - Pull-up transaction sheet
//! - `placeholder` - "Under development" view for the other tabs
//! - `footer` - Bottom navigation bar
//! - `components` - Overlays (toast notifications)
//! - `helpers` - Shared drawing helpers

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod placeholder;
pub mod sheet;

use ratatui::{Frame, buffer::Buffer, layout::Rect, widgets::Widget};

use crate::state::{App, ContentView};
use crate::theme::DESKTOP_BG;

use header::HeaderView;
use layout::{HEADER_HEIGHT, app_layout, page_height, sheet_top};
use placeholder::PlaceholderView;
use sheet::TransactionSheet;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// # Arguments
///
/// * `app` - The application state containing all data to render
/// * `frame` - The ratatui frame to render to
pub fn render(app: &App, frame: &mut Frame) {
    let screen = frame.area();
    helpers::fill(frame.buffer_mut(), screen, DESKTOP_BG);

    let layout = app_layout(screen);
    let page = render_page(app, layout.page.width, layout.page.height);
    helpers::blit(&page, app.viewport.offset(), layout.page, frame.buffer_mut());

    footer::render(frame, layout.footer, app);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, layout.page, message);
    }
}

/// Draw the whole scrollable page for a viewport of the given size.
#[must_use]
pub fn render_page(app: &App, width: u16, viewport_height: u16) -> Buffer {
    let slide = app.sheet_slide();
    let height = page_height(app.content_height(), viewport_height).saturating_add(slide);
    let mut page = Buffer::empty(Rect::new(0, 0, width, height));

    HeaderView::new(app.data.balance, app.ui.balance_visible)
        .render(Rect::new(0, 0, width, HEADER_HEIGHT.min(height)), &mut page);

    let top = sheet_top().saturating_add(slide).min(height);
    let content = Rect::new(0, top, width, height - top);
    let elapsed = app.view_elapsed_ticks();

    match app.ui.content_view() {
        ContentView::Transactions => TransactionSheet::new(&app.data.transactions)
            .elapsed_ticks(elapsed)
            .render(content, &mut page),
        ContentView::Placeholder => PlaceholderView::new(elapsed).render(content, &mut page),
    }

    page
}

// ============================================================================
// Tests
// ============================================================================
