//! Board screen state and key handling.

use super::input::{digit_position, move_cursor};
use super::orchestrator::GameEvent;
use crate::mode::GameMode;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_core::{Game, GameStatus, Line, Mark, Position};
use tracing::{debug, instrument, warn};

/// What the board screen wants done after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing beyond the local state change.
    None,
    /// Hand this position to the player to move.
    Submit(Position),
    /// Start the same mode over.
    Restart,
    /// Return to the start screen.
    Menu,
    /// Exit the application.
    Quit,
}

/// Board screen state.
///
/// The game here is a mirror of the orchestrator's, updated only from
/// [`GameEvent`]s.
#[derive(Debug, Clone, Getters)]
pub struct App {
    /// Mirror of the orchestrator's game.
    game: Game,
    /// Mode this game was started in.
    mode: GameMode,
    /// Mark the computer plays when the mode has one.
    computer_mark: Mark,
    /// Highlighted square.
    cursor: Position,
    /// The computer is choosing a move.
    thinking: bool,
    /// A square was submitted and the orchestrator has not answered yet.
    awaiting_move: bool,
    /// Why the last submitted move was refused.
    notice: Option<String>,
    /// Cells to highlight once the game is won.
    winning_line: Option<Line>,
}

impl App {
    /// Creates the state for a fresh game.
    pub fn new(mode: GameMode, computer_mark: Mark) -> Self {
        Self {
            game: Game::new(),
            mode,
            computer_mark,
            cursor: Position::Center,
            thinking: false,
            awaiting_move: false,
            notice: None,
            winning_line: None,
        }
    }

    /// Status line shown under the board.
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::Won(mark) => format!("Player {} Wins!", mark),
            GameStatus::Draw => "It's a Draw!".to_string(),
            GameStatus::InProgress if self.thinking => "Computer is thinking...".to_string(),
            GameStatus::InProgress => format!("Player {}'s Turn", self.game.to_move()),
        }
    }

    /// Whether a square chosen now would be handed to a player.
    pub fn accepts_input(&self) -> bool {
        !self.game.is_over()
            && !self.thinking
            && !self.awaiting_move
            && !self.mode.is_computer(self.game.to_move(), self.computer_mark)
    }

    /// Handles a game event from the orchestrator.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Thinking { .. } => {
                self.thinking = true;
            }
            GameEvent::MoveMade { mov, .. } => {
                self.thinking = false;
                self.awaiting_move = false;
                self.notice = None;
                if let Err(e) = self.game.play(mov) {
                    warn!(error = %e, %mov, "Move could not be mirrored");
                }
            }
            GameEvent::Rejected {
                position, reason, ..
            } => {
                self.thinking = false;
                self.awaiting_move = false;
                self.notice = Some(format!("{}: {}", position.label(), reason));
            }
            GameEvent::GameOver { line, .. } => {
                self.thinking = false;
                self.awaiting_move = false;
                self.winning_line = line;
            }
        }
    }

    /// Handles a key press on the board screen.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('r') => AppAction::Restart,
            KeyCode::Char('m') | KeyCode::Esc => AppAction::Menu,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.try_submit(self.cursor),
            KeyCode::Char(c) => match digit_position(c) {
                Some(pos) => {
                    self.cursor = pos;
                    self.try_submit(pos)
                }
                None => AppAction::None,
            },
            _ => AppAction::None,
        }
    }

    fn try_submit(&mut self, pos: Position) -> AppAction {
        if !self.accepts_input() {
            debug!(%pos, "Input ignored");
            return AppAction::None;
        }
        if !self.game.board().is_empty(pos) {
            debug!(%pos, "Square occupied, input ignored");
            return AppAction::None;
        }
        self.awaiting_move = true;
        AppAction::Submit(pos)
    }

    /// Restarts the game in the same mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new(self.mode, self.computer_mark);
    }
}
