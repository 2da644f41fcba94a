//! Noughts core - tic-tac-toe rules and an optimal computer opponent.
//!
//! This crate is pure game logic: no I/O, no async, no global state.
//!
//! # Architecture
//!
//! - **Board State**: [`Board`], [`Square`], [`Mark`] and the win/draw rules
//! - **Move Selector**: exhaustive minimax with depth-weighted scoring
//! - **Game Session**: [`Game`] sequences turns and freezes on a result
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, Position, select_move};
//!
//! let board: Board = "XX. O.. ...".parse().unwrap();
//! assert_eq!(select_move(&board, Mark::O), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Board state
pub use position::{ParsePositionError, Position};
pub use types::{Board, GameStatus, Mark, ParseBoardError, ParseMarkError, Square};

// Crate-level exports - Rules
pub use rules::{LINES, Line, check_winner, is_draw, is_full, is_terminal, winning_line};

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Move selection
pub use search::{DEPTH_OFFSET, Evaluation, MoveSelector, select_move};

// Crate-level exports - Session
pub use game::Game;

// Crate-level exports - Invariants
pub use invariants::{
    GameInvariants, HistoryConsistent, Invariant, InvariantSet, InvariantViolation, MarkBalance,
};
