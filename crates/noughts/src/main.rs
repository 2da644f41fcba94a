//! Noughts - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, Config, best_move, run_tui, self_play};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command_or_default() {
        Command::Play { mode } => run_tui(config, mode).await,
        Command::BestMove {
            board,
            mark,
            explain,
        } => {
            init_stderr_logging();
            print!("{}", best_move(&board, mark, explain)?);
            Ok(())
        }
        Command::SelfPlay => {
            init_stderr_logging();
            debug!(?config, "Running self-play");
            print!("{}", self_play()?);
            Ok(())
        }
    }
}

/// Commands print to stdout, so logs go to stderr.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
