//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` / `load()` - Create an application instance
//! - `run()` - Main event loop on the real terminal
//! - `run_with_events()` - The same loop driven by a scripted event sequence
//! - `on_tick()` - Timer housekeeping (animations, toast countdown)

use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
#[cfg(test)]
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;

use crate::domain::Dataset;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, StartupOptions, UiState, Viewport};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance from already loaded data and configuration.
    #[must_use]
    pub fn new(data: Dataset, config: AppConfig, options: &StartupOptions) -> Self {
        let mut ui = UiState::new();
        if let Some(tab) = &options.tab {
            ui.active_tab.clone_from(tab);
        }
        ui.balance_visible = !options.hide_balance;

        let mut app = Self {
            data,
            ui,
            sheet: None,
            viewport: Viewport::new(),
            config,
            screen: Rect::default(),
            exit: false,
            animation_tick: 0,
            view_mounted_at: 0,
        };
        app.sync_mounted_view();
        app
    }

    /// Creates a new App instance, loading configuration and the dataset.
    ///
    /// The dataset comes from `--data` if given, then from the config file's
    /// `data_file`, and otherwise is the built-in demo account.
    ///
    /// # Errors
    ///
    /// Returns an error if a dataset file was requested but cannot be loaded.
    pub fn load(options: StartupOptions) -> Result<Self> {
        let config = AppConfig::load();

        let data = match options.data_file.as_ref().or(config.data_file.as_ref()) {
            Some(path) => Dataset::load(path)?,
            None => {
                tracing::info!("Using built-in demo dataset");
                Dataset::demo()
            }
        };

        Ok(Self::new(data, config, &options))
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.update_screen(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| ui::render(self, frame))?;

        let tick_rate = self.config.tick_rate();
        let mut last_tick = Instant::now();

        while !self.exit {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                let event = event::read()?;
                let redraw = matches!(event, Event::Resize(_, _));
                self.handle_event(event);
                if redraw {
                    terminal.draw(|frame| ui::render(self, frame))?;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Runs the loop over a fixed sequence of events, one tick per event.
    ///
    /// Stops early when an event requests exit.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    #[cfg(test)]
    pub fn run_with_events<B, I>(&mut self, terminal: &mut Terminal<B>, events: I) -> Result<()>
    where
        B: Backend,
        I: IntoIterator<Item = Event>,
    {
        let size = terminal.size()?;
        self.update_screen(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| ui::render(self, frame))?;

        for event in events {
            self.handle_event(event);
            if self.exit {
                break;
            }
            self.on_tick();
            terminal.draw(|frame| ui::render(self, frame))?;
        }

        Ok(())
    }

    /// Advances animations and expires the toast.
    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if self.ui.tick_toast() {
            tracing::debug!("Toast expired");
        }
    }
}
