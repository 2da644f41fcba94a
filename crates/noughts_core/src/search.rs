//! Optimal move selection by exhaustive minimax.
//!
//! Every candidate square is scored by searching the full game tree below
//! it. Terminal positions score `DEPTH_OFFSET - depth` when the computer has
//! won, `depth - DEPTH_OFFSET` when its opponent has won and `0` for a draw,
//! so faster wins and slower losses are preferred. Depth counts plies below
//! the candidate move: the candidate itself sits at depth 0.

use super::action::MoveError;
use super::position::Position;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Offset that depth is subtracted from when scoring a decided game.
///
/// A 3x3 board never searches deeper than 9 plies, so any win keeps a
/// positive score. Larger boards would need a larger offset.
pub const DEPTH_OFFSET: i32 = 10;

/// Minimax score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Square the computer would take.
    pub position: Position,
    /// Score of the resulting board with the opponent to reply.
    pub score: i32,
}

/// Chooses moves for a fixed computer mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    computer: Mark,
}

impl MoveSelector {
    /// Creates a selector playing as `computer`.
    pub fn new(computer: Mark) -> Self {
        Self { computer }
    }

    /// The mark this selector plays.
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// The mark this selector plays against.
    pub fn human(&self) -> Mark {
        self.computer.opponent()
    }

    /// Scores every empty square in index order.
    ///
    /// The caller's board is never modified; every hypothetical move is made
    /// on a copy.
    ///
    /// # Errors
    ///
    /// [`MoveError::PreconditionViolated`] if the board is already won or full.
    #[instrument(skip(self, board), fields(computer = %self.computer, board = %board))]
    pub fn evaluate(&self, board: &Board) -> Result<Vec<Evaluation>, MoveError> {
        if board.is_terminal() {
            return Err(MoveError::PreconditionViolated(format!(
                "no move to select on finished board {}",
                board
            )));
        }

        let mut search = Search::new(self.computer);
        let evaluations: Vec<Evaluation> = board
            .empty_positions()
            .map(|position| -> Result<Evaluation, MoveError> {
                let child = board.with_mark(position, self.computer)?;
                let score = search.minimax(&child, 0, false);
                Ok(Evaluation { position, score })
            })
            .collect::<Result<_, _>>()?;

        debug!(
            nodes = search.nodes,
            candidates = evaluations.len(),
            "Search complete"
        );
        Ok(evaluations)
    }

    /// Picks the highest scoring square, preferring the lowest index on ties.
    ///
    /// # Errors
    ///
    /// [`MoveError::PreconditionViolated`] if the board is already won or full.
    #[instrument(skip(self, board), fields(computer = %self.computer))]
    pub fn select_move(&self, board: &Board) -> Result<Position, MoveError> {
        let mut best: Option<Evaluation> = None;
        for eval in self.evaluate(board)? {
            // Strict comparison keeps the earliest of equal scores.
            if best.is_none_or(|b| eval.score > b.score) {
                best = Some(eval);
            }
        }

        let best = best.ok_or_else(|| {
            MoveError::PreconditionViolated("board has no empty squares".to_string())
        })?;
        debug!(position = %best.position, score = best.score, "Selected move");
        Ok(best.position)
    }
}

/// Optimal move for `computer` on `board`.
///
/// # Errors
///
/// [`MoveError::PreconditionViolated`] if the board is already won or full.
pub fn select_move(board: &Board, computer: Mark) -> Result<Position, MoveError> {
    MoveSelector::new(computer).select_move(board)
}

struct Search {
    computer: Mark,
    nodes: u64,
}

impl Search {
    fn new(computer: Mark) -> Self {
        Self { computer, nodes: 0 }
    }

    fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match board.winner() {
            Some(mark) if mark == self.computer => return DEPTH_OFFSET - depth,
            Some(_) => return depth - DEPTH_OFFSET,
            None if board.is_full() => return 0,
            None => {}
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in board.empty_positions() {
            let mut child = *board;
            child.set(pos, Square::Occupied(mover));
            let score = self.minimax(&child, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_scores_full_offset() {
        let evals = MoveSelector::new(Mark::O)
            .evaluate(&board("OO. XX. ..X"))
            .unwrap();
        let win = evals
            .iter()
            .find(|e| e.position == Position::TopRight)
            .unwrap();
        assert_eq!(win.score, DEPTH_OFFSET);
    }

    #[test]
    fn test_block_scores_above_other_moves() {
        let evals = MoveSelector::new(Mark::O)
            .evaluate(&board("XX. O.. ..."))
            .unwrap();
        let block = evals
            .iter()
            .find(|e| e.position == Position::TopRight)
            .unwrap();
        assert!(
            evals
                .iter()
                .filter(|e| e.position != Position::TopRight)
                .all(|e| e.score < block.score)
        );
        assert_eq!(
            select_move(&board("XX. O.. ..."), Mark::O),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_lost_positions_score_negative() {
        let evals = MoveSelector::new(Mark::O)
            .evaluate(&board("XX. O.. ..."))
            .unwrap();
        for eval in evals.iter().filter(|e| e.position != Position::TopRight) {
            assert_eq!(eval.score, 1 - DEPTH_OFFSET);
        }
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let won = board("XXX OO. ...");
        assert!(matches!(
            select_move(&won, Mark::O),
            Err(MoveError::PreconditionViolated(_))
        ));

        let full = board("XOX XOO OXX");
        assert!(matches!(
            select_move(&full, Mark::O),
            Err(MoveError::PreconditionViolated(_))
        ));
    }
}
