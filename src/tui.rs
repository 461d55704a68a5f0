//! Terminal setup and teardown.
//!
//! The app draws on the alternate screen in raw mode with mouse capture
//! enabled, so wheel scrolling and clicks reach the event loop.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// The terminal type used by the running app.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into app mode.
///
/// # Errors
///
/// Returns an error if raw mode or the alternate screen cannot be enabled.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    set_panic_hook();

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restores the terminal before a panic message is printed.
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}

/// Returns the terminal to its normal state.
///
/// # Errors
///
/// Returns an error if the terminal modes cannot be reset.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    tracing::debug!("Terminal restored");
    Ok(())
}
