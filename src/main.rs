use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::path::PathBuf;

// Declare modules
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::state::{App, StartupOptions};

// Blue Bank version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
██████╗ ██╗     ██╗   ██╗███████╗    ██████╗  █████╗ ███╗   ██╗██╗  ██╗
██╔══██╗██║     ██║   ██║██╔════╝    ██╔══██╗██╔══██╗████╗  ██║██║ ██╔╝
██████╔╝██║     ██║   ██║█████╗      ██████╔╝███████║██╔██╗ ██║█████╔╝
██╔══██╗██║     ██║   ██║██╔══╝      ██╔══██╗██╔══██║██║╚██╗██║██╔═██╗
██████╔╝███████╗╚██████╔╝███████╗    ██████╔╝██║  ██║██║ ╚████║██║  ██╗
╚═════╝ ╚══════╝ ╚═════╝ ╚══════╝    ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝
"#;

/// Blue Bank - the mobile banking home screen in your terminal
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load balance, transactions and navigation from a JSON file
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Navigation item to open first
    #[arg(short, long, value_name = "ID")]
    tab: Option<String>,

    /// Start with the balance masked
    #[arg(long)]
    hide_balance: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

impl Cli {
    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            data_file: self.data.clone(),
            tab: self.tab.clone(),
            hide_balance: self.hide_balance,
        }
    }
}

/// Application entry point
fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if handle_cli_commands(&cli) {
        return Ok(());
    }

    // Logging is best effort; the app runs without it.
    if let Err(err) = logging::init(cli.log_file.clone()) {
        eprintln!("Logging disabled: {err}");
    }

    let mut app = App::load(cli.startup_options())?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;

    if let Err(err) = &result {
        tracing::error!("Application error: {err}");
    }
    result
}

/// Handles CLI subcommands. Returns `true` if the app should exit.
fn handle_cli_commands(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("Blue Bank v{VERSION}");
            println!("The Blue Bank home screen: balance, transactions and navigation");
            true
        }
        None => false,
    }
}
