//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the session share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal};
pub use win::{LINES, Line, check_winner, winning_line};
