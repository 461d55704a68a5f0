//! Footer rendering module for the Blue Bank TUI.
//!
//! This module provides the bottom navigation bar: one evenly sized item per
//! navigation entry, each an icon above its label. The active item is drawn
//! in the accent color.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
};

use crate::domain::NavigationItem;
use crate::state::App;
use crate::theme::{ACTIVE_TAB_STYLE, DIVIDER, INACTIVE_TAB_STYLE, SURFACE};
use crate::widgets::NavIcon;

use super::helpers::{fill, render_divider};
use super::layout::footer_item_areas;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the navigation bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    render_items(frame, area, &app.data.nav_items, &app.ui.active_tab);
}

/// Renders `items` into `area`, highlighting the one whose id is `active_tab`.
pub fn render_items(frame: &mut Frame, area: Rect, items: &[NavigationItem], active_tab: &str) {
    let buf = frame.buffer_mut();
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    fill(buf, area, SURFACE);
    render_divider(buf, area, DIVIDER);

    for (item, slot) in items.iter().zip(footer_item_areas(area, items.len())) {
        let style = if item.id == active_tab {
            ACTIVE_TAB_STYLE
        } else {
            INACTIVE_TAB_STYLE
        };
        let glyph = NavIcon::from_key(&item.icon).glyph();

        if slot.height > 1 {
            let icon_row = Rect::new(slot.x, slot.y + 1, slot.width, 1);
            frame.render_widget(
                Line::from(Span::styled(glyph, style)).alignment(Alignment::Center),
                icon_row,
            );
        }
        if slot.height > 2 {
            let label_row = Rect::new(slot.x, slot.y + 2, slot.width, 1);
            frame.render_widget(
                Line::from(Span::styled(item.label.as_str(), style)).alignment(Alignment::Center),
                label_row,
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{NavItemMother, buffer_to_string, demo_app, test_terminal};
    use crate::theme::YELLOW;
    use crate::ui::layout::FOOTER_HEIGHT;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    /// Tests the footer shows every demo navigation label.
    #[rstest]
    fn test_footer_displays_all_items(demo_app: App, mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, frame.area().width, FOOTER_HEIGHT);
                render(frame, area, &demo_app);
            })
            .unwrap();

        let content = buffer_to_string(test_terminal.backend().buffer());
        for item in &demo_app.data.nav_items {
            assert!(
                content.contains(&item.label),
                "Footer should contain '{}', got: {}",
                item.label,
                content
            );
            assert!(content.contains(NavIcon::from_key(&item.icon).glyph()));
        }
    }

    #[test]
    fn test_active_item_uses_accent() {
        let items = [
            NavItemMother::with_icon("home", "home"),
            NavItemMother::with_icon("cards", "credit_card"),
        ];
        let mut terminal = Terminal::new(TestBackend::new(20, FOOTER_HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_items(frame, area, &items, "cards");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Icons sit in the middle of each half.
        assert_eq!(buffer[(4, 1)].symbol(), NavIcon::Home.glyph());
        assert_ne!(buffer[(4, 1)].fg, YELLOW);
        assert_eq!(buffer[(14, 1)].symbol(), NavIcon::CreditCard.glyph());
        assert_eq!(buffer[(14, 1)].fg, YELLOW);
    }

    #[test]
    fn test_unknown_icon_falls_back_to_home() {
        let items = [NavItemMother::with_icon("x", "no_such_icon")];
        let mut terminal = Terminal::new(TestBackend::new(9, FOOTER_HEIGHT)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_items(frame, area, &items, "home");
            })
            .unwrap();

        assert_eq!(
            terminal.backend().buffer()[(4, 1)].symbol(),
            NavIcon::Home.glyph()
        );
    }

    #[test]
    fn test_footer_handles_tiny_area() {
        let items = [NavItemMother::with_icon("home", "home")];
        let mut terminal = Terminal::new(TestBackend::new(4, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_items(frame, area, &items, "home");
            })
            .unwrap();
    }
}
