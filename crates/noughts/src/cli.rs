//! Command-line interface for noughts.

use crate::config::DEFAULT_CONFIG_PATH;
use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use noughts_core::{Board, Mark};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal with an optimal computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, falling back to the interactive game.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play { mode: None })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Skip the start screen and begin in this mode
        #[arg(long, value_enum)]
        mode: Option<GameMode>,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Board as 9 squares in row-major order, e.g. "XX.O....." or "XX_/O__/___"
        #[arg(allow_hyphen_values = true)]
        board: Board,

        /// Side to find a move for (defaults to the side to move)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Print the score of every candidate square
        #[arg(long)]
        explain: bool,
    },

    /// Let the computer play both sides from the empty board
    SelfPlay,
}
