//! Turn-sequenced game session.
//!
//! A [`Game`] owns the authoritative board for one session, tracks whose
//! turn it is, and freezes once the game is won or drawn.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::Line;
use super::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One game of tic-tac-toe, from the empty board to a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Replays a sequence of positions from the empty board, alternating
    /// marks starting with X.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.place(*pos)?;
        }
        Ok(game)
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// Returns the status after the move. The turn passes to the opponent
    /// only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already been won or drawn.
    /// - [`MoveError::InvalidMove`] if the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.place(pos, self.to_move)?;
        self.history.push(Move::new(self.to_move, pos));
        self.status = self.board.status();

        if !self.status.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, moves = self.history.len(), "Move applied");

        #[cfg(debug_assertions)]
        {
            use super::invariants::{GameInvariants, InvariantSet};
            if let Err(violations) = GameInvariants::check_all(self) {
                panic!("Game invariants violated: {:?}", violations);
            }
        }

        Ok(self.status)
    }

    /// Applies a move, checking that it is made by the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongTurn`] if `mov.mark` is not to move, otherwise as
    /// for [`Game::place`].
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.mark != self.to_move {
            return Err(MoveError::WrongTurn(mov.mark));
        }
        self.place(mov.position)
    }

    /// Clears the board for a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move next. Once the game is over this is the mark that
    /// made the final move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.board.winning_line().map(|(_, line)| line)
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn board_mut_for_tests(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        game.place(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_square_keeps_turn() {
        let mut game = Game::new();
        game.place(Position::Center).unwrap();
        let err = game.place(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::InvalidMove(Position::Center));
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_freezes_board() {
        // X: 0, 1, 2 / O: 3, 4
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();

        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );

        let before = *game.board();
        assert_eq!(game.place(Position::BottomRight), Err(MoveError::GameOver));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_play_rejects_wrong_turn() {
        let mut game = Game::new();
        let err = game.play(Move::new(Mark::O, Position::Center)).unwrap_err();
        assert_eq!(err, MoveError::WrongTurn(Mark::O));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }
}
