//! Terminal UI: start screen, board screen and turn orchestration.

mod app;
mod controller;
mod input;
mod menu;
mod orchestrator;
mod players;
mod screen;
mod session;
mod ui;

pub use app::{App, AppAction};
pub use controller::Controller;
pub use input::{digit_position, move_cursor};
pub use menu::{MenuOption, MenuScreen};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, MoveInput, Player};
pub use screen::{Screen, ScreenTransition};
pub use session::GameSession;

use crate::config::Config;
use crate::mode::GameMode;
use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Runs the terminal UI.
///
/// Logs go to the configured log file so they do not corrupt the screen.
pub async fn run_tui(config: Config, mode: Option<GameMode>) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?mode, computer_mark = %config.computer_mark(), "Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = Controller::new(config, mode).run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    res
}
