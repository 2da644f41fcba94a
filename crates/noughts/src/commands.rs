//! Non-interactive commands.
//!
//! Each command renders its report to a `String` so the binary only has to
//! print it.

use anyhow::Result;
use noughts_core::{Board, Game, GameStatus, Mark, MoveSelector};
use std::fmt::Write;
use tracing::{info, instrument};

/// Finds the optimal move for `mark` (or the side to move) on `board`.
///
/// With `explain` set, the score of every candidate square is listed too.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, mark: Option<Mark>, explain: bool) -> Result<String> {
    let mark = mark.unwrap_or_else(|| board.side_to_move());
    let selector = MoveSelector::new(mark);
    let position = selector.select_move(board)?;
    info!(%mark, %position, "Best move found");

    let mut out = String::new();
    writeln!(out, "{}", board.display())?;
    writeln!(out)?;
    writeln!(
        out,
        "Best move for {}: {} ({})",
        mark,
        position.to_index(),
        position.label()
    )?;

    if explain {
        writeln!(out)?;
        writeln!(out, "Scores for {} (higher is better):", mark)?;
        for eval in selector.evaluate(board)? {
            let marker = if eval.position == position { " <" } else { "" };
            writeln!(
                out,
                "  {} {:<13} {:>3}{}",
                eval.position.to_index(),
                eval.position.label(),
                eval.score,
                marker
            )?;
        }
    }

    Ok(out)
}

/// Plays the computer against itself from the empty board.
#[instrument]
pub fn self_play() -> Result<String> {
    let mut game = Game::new();
    let mut out = String::new();

    while !game.is_over() {
        let mark = game.to_move();
        let position = MoveSelector::new(mark).select_move(game.board())?;
        game.place(position)?;
        writeln!(
            out,
            "{}. {} plays {} ({})",
            game.history().len(),
            mark,
            position.to_index(),
            position.label()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", game.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", outcome_text(game.status()))?;

    info!(status = ?game.status(), moves = game.history().len(), "Self-play finished");
    Ok(out)
}

fn outcome_text(status: GameStatus) -> String {
    match status {
        GameStatus::Won(mark) => format!("Player {} Wins!", mark),
        GameStatus::Draw => "It's a Draw!".to_string(),
        GameStatus::InProgress => "Game in progress".to_string(),
    }
}
