//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are checked after every move in
//! debug builds.

use super::{Board, Game, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

impl Invariant<Game> for MarkBalance {
    fn holds(game: &Game) -> bool {
        <MarkBalance as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <MarkBalance as Invariant<Board>>::description()
    }
}

/// Invariant: replaying the move history reproduces the board.
///
/// Squares only ever go from empty to occupied, each move lands on an
/// empty square, and marks alternate starting with X.
pub struct HistoryConsistent;

impl Invariant<Game> for HistoryConsistent {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();
        let mut expected = Mark::X;

        for mov in game.history() {
            if mov.mark != expected || reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            if reconstructed.place(mov.position, mov.mark).is_err() {
                return false;
            }
            expected = expected.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (MarkBalance, HistoryConsistent);
