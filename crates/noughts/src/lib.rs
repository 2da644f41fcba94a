//! Noughts - terminal tic-tac-toe with an unbeatable computer opponent.
//!
//! Game logic lives in [`noughts_core`]; this crate adds the pieces around it.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with the think delay, computer mark and log file
//! - **CLI**: `play`, `best-move` and `self-play` subcommands
//! - **TUI**: start screen and board screen on ratatui/crossterm
//! - **Orchestrator**: async task that asks each player for a move in turn

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod commands;
mod config;
mod mode;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Commands
pub use commands::{best_move, self_play};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Game mode
pub use mode::GameMode;

// Crate-level exports - Terminal UI
pub use tui::{
    App, AppAction, ComputerPlayer, Controller, GameEvent, GameSession, HumanPlayer, MenuOption,
    MenuScreen, MoveInput, Orchestrator, Player, Screen, ScreenTransition, digit_position,
    move_cursor, run_tui,
};
