//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules::{self, Line};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Error returned when text is not `X` or `O`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Not a mark: {:?} (expected X or O)", _0)]
pub struct ParseMarkError(pub String);

impl std::error::Error for ParseMarkError {}

impl std::str::FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(ParseMarkError(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// Current status of a board or game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: cheap to copy, compared by cell contents,
/// and serialized as a sequence of 9 squares in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    ///
    /// No consistency checks are made; see [`Board::from_str`](std::str::FromStr)
    /// for a validating constructor.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Overwrites the square at `pos` without checking it.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the square is already occupied.
    /// The board is left untouched in that case.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            trace!(?pos, %mark, "Square already occupied");
            return Err(MoveError::InvalidMove(pos));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Result<Board, MoveError> {
        let mut next = *self;
        next.place(pos, mark)?;
        Ok(next)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// The mark whose turn it is, judging by the marks already placed.
    ///
    /// X moves whenever the counts are equal.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns the winning mark, if any line is complete.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns the winning mark together with the first complete line.
    pub fn winning_line(&self) -> Option<(Mark, Line)> {
        rules::winning_line(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when the game on this board is won or drawn.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Classifies the board from its cell contents alone.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Formats the board as a human-readable grid, numbering empty squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: 9 characters, `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error returned when text does not describe a reachable board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    BadCharacter(char),
    /// Mark counts that no legal game can produce.
    #[display("Impossible mark counts: {} X and {} O", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for ParseBoardError {}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`/`O` for marks and `.`, `_`, `-` or a digit for empty
    /// squares. Whitespace, `|` and `/` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | '1'..='9' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => return Err(ParseBoardError::BadCharacter(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        let board = Board::from_squares(squares);

        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x != o && x != o + 1 {
            return Err(ParseBoardError::Unbalanced { x, o });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        let err = board.place(Position::Center, Mark::O).unwrap_err();
        assert_eq!(err, MoveError::InvalidMove(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_board_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::TopLeft, Mark::X).unwrap();
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(next.get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_side_to_move() {
        let mut board = Board::new();
        assert_eq!(board.side_to_move(), Mark::X);
        board.place(Position::Center, Mark::X).unwrap();
        assert_eq!(board.side_to_move(), Mark::O);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "OO. XX. ...".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::X));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "OO.XX....");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::BadCharacter('?'))
        );
        assert_eq!(
            "XXX......".parse::<Board>(),
            Err(ParseBoardError::Unbalanced { x: 3, o: 0 })
        );
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert!("z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
