//! Terminal UI for tic-tac-toe.
//!
//! Single-threaded and event-driven: the loop draws a frame from the
//! [`App`], blocks for the next terminal event, applies it, and repeats.

mod app;
mod input;
mod layout;
mod ui;

use crate::cli::Cli;
use crate::config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

pub use app::App;
pub use input::{Action, key_action, mouse_action, move_cursor};
pub use layout::{BOARD_HEIGHT, BOARD_WIDTH, BoardLayout, CELL_HEIGHT, CELL_WIDTH};
pub use ui::{RESET_LABEL, draw, render_board};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
pub fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_file)?;

    info!("Starting tic-tac-toe");

    let theme = config::load_theme(cli.config.as_deref())?;
    let mut app = App::new(theme);

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!(final_status = %app.status_message(), "Exiting");
    res
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;
        let event = event::read().context("Failed to read terminal event")?;
        app.handle_event(&event, area);
    }
    Ok(())
}
