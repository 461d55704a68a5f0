//! Input handling and command execution for the App.
//!
//! Terminal events are turned into [`AppCommand`]s (keys through the key
//! mapper, clicks through the layout hit test) and executed here.

use crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::commands::{AppCommand, map_key};
use crate::constants::{IN_DEVELOPMENT, REPORT_LABEL, TOP_UP_LABEL};
use crate::ui::layout::{HitTarget, app_layout, hit_test, max_scroll_with_slide};

use super::{App, ContentView, SheetState};

impl App {
    // ========================================================================
    // Event Dispatch
    // ========================================================================

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key_event(key);
            }
            Event::Mouse(mouse) => self.handle_mouse_input(mouse),
            Event::Resize(width, height) => self.update_screen(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    /// Handles keyboard input by mapping it to a command.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let command = map_key(key_event);
        self.execute_command(command);
    }

    /// Handles mouse input: the wheel scrolls, left clicks hit controls.
    pub fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        let command = match mouse.kind {
            MouseEventKind::ScrollUp => AppCommand::ScrollUp,
            MouseEventKind::ScrollDown => AppCommand::ScrollDown,
            MouseEventKind::Down(MouseButton::Left) => {
                self.command_at(Position::new(mouse.column, mouse.row))
            }
            _ => AppCommand::Noop,
        };
        self.execute_command(command);
    }

    /// The command triggered by a click at `position`.
    #[must_use]
    pub fn command_at(&self, position: Position) -> AppCommand {
        let target = hit_test(
            self.screen,
            self.viewport.offset(),
            self.sheet_slide(),
            self.data.nav_items.len(),
            position,
        );
        match target {
            HitTarget::Tab(index) => AppCommand::SelectTabAt(index),
            HitTarget::BalanceToggle => AppCommand::ToggleBalance,
            HitTarget::Report => AppCommand::Report,
            HitTarget::TopUp => AppCommand::TopUp,
            HitTarget::Nothing => AppCommand::Noop,
        }
    }

    // ========================================================================
    // Command Execution
    // ========================================================================

    /// Executes an application command.
    pub fn execute_command(&mut self, command: AppCommand) {
        let step = i32::from(self.config.scroll_step());
        let page = i32::from(self.page_rows());

        match command {
            AppCommand::Quit => {
                tracing::info!("Quit requested");
                self.exit = true;
            }
            AppCommand::ToggleBalance => {
                self.toggle_balance();
            }
            AppCommand::TopUp => self.action_in_development(TOP_UP_LABEL),
            AppCommand::Report => self.action_in_development(REPORT_LABEL),
            AppCommand::NextTab => self.cycle_tab(1),
            AppCommand::PreviousTab => self.cycle_tab(-1),
            AppCommand::SelectTabAt(index) => self.select_tab_at(index),
            AppCommand::ScrollUp => self.scroll(-step),
            AppCommand::ScrollDown => self.scroll(step),
            AppCommand::PageUp => self.scroll(-page),
            AppCommand::PageDown => self.scroll(page),
            AppCommand::ScrollToTop => self.viewport.scroll_to(0),
            AppCommand::ScrollToBottom => {
                let bottom = self.viewport.max_offset();
                self.viewport.scroll_to(bottom);
            }
            AppCommand::Noop => {}
        }

        if command.is_scroll() {
            tracing::trace!(offset = self.viewport.offset(), "Scrolled");
        }
    }

    // ========================================================================
    // Header
    // ========================================================================

    /// Shows or hides the balance. Returns the new visibility.
    pub fn toggle_balance(&mut self) -> bool {
        let visible = self.ui.toggle_balance();
        tracing::info!(visible, "Balance visibility toggled");
        visible
    }

    fn action_in_development(&mut self, label: &str) {
        tracing::info!(action = label, "Action pressed, no flow available");
        self.ui
            .show_toast(format!("{label} {IN_DEVELOPMENT}"), self.config.toast_ticks);
    }

    // ========================================================================
    // Navigation Bar
    // ========================================================================

    /// Makes `tab_id` the active tab and mounts the matching view.
    ///
    /// Any id is accepted; ids other than home select the placeholder.
    pub fn select_tab(&mut self, tab_id: &str) {
        let previous = self.ui.active_tab.clone();
        if !self.ui.select_tab(tab_id) {
            return;
        }
        tracing::info!(from = %previous, to = %tab_id, "Tab selected");
        // Every tab change remounts the content view, placeholders included.
        self.view_mounted_at = self.animation_tick;
        self.sync_mounted_view();
    }

    /// Selects the navigation item at `index`, ignoring positions past the end.
    pub fn select_tab_at(&mut self, index: usize) {
        if let Some(item) = self.data.nav_items.get(index) {
            let id = item.id.clone();
            self.select_tab(&id);
        }
    }

    /// Moves the selection `step` items along the bar, wrapping around.
    ///
    /// When the active tab is not one of the items, the first item is chosen.
    pub fn cycle_tab(&mut self, step: isize) {
        let count = self.data.nav_items.len();
        if count == 0 {
            return;
        }
        let next = match self.data.nav_index(&self.ui.active_tab) {
            Some(current) => (current as isize + step).rem_euclid(count as isize) as usize,
            None => 0,
        };
        self.select_tab_at(next);
    }

    /// Mounts or unmounts the transaction sheet to match the active tab.
    pub(super) fn sync_mounted_view(&mut self) {
        let wants_sheet = self.ui.content_view() == ContentView::Transactions;

        match (wants_sheet, self.sheet.is_some()) {
            (true, false) => {
                self.sheet = Some(SheetState::mount(
                    &self.viewport,
                    self.config.sheet_initial_offset,
                    self.animation_tick,
                ));
                self.view_mounted_at = self.animation_tick;
                tracing::debug!(
                    subscribers = self.viewport.subscriber_count(),
                    "Transaction sheet mounted"
                );
            }
            (false, true) => {
                self.sheet = None;
                self.view_mounted_at = self.animation_tick;
                tracing::debug!(
                    subscribers = self.viewport.subscriber_count(),
                    "Transaction sheet unmounted"
                );
            }
            _ => {}
        }

        self.refresh_scroll_bounds();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Scrolls the page by `delta` rows.
    pub fn scroll(&mut self, delta: i32) {
        self.viewport.scroll_by(delta);
    }

    /// Rows moved by a page scroll: the viewport height less one row of context.
    #[must_use]
    pub fn page_rows(&self) -> u16 {
        app_layout(self.screen).page.height.saturating_sub(1).max(1)
    }

    /// Records a new terminal size and recomputes the scroll range.
    pub fn update_screen(&mut self, screen: Rect) {
        self.screen = screen;
        self.refresh_scroll_bounds();
    }

    pub(super) fn refresh_scroll_bounds(&mut self) {
        let viewport_height = app_layout(self.screen).page.height;
        let max = max_scroll_with_slide(self.content_height(), viewport_height, |offset| {
            self.sheet.as_ref().map_or(0, |sheet| sheet.slide_at(offset))
        });
        self.viewport.set_max_offset(max);
    }
}
