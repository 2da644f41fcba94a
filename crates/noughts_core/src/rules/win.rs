//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::trace;

/// Three positions that win when they share a mark.
pub type Line = [Position; 3];

/// All winning lines: rows, then columns, then diagonals.
///
/// Detection walks this table in order, so when a board somehow holds
/// two complete lines the earlier one is reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and the mark that owns it.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            trace!(?mark, ?line, "Complete line found");
            return Some((mark, line));
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
