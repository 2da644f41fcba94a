//! Game orchestration between players.

use super::players::Player;
use anyhow::Result;
use noughts_core::{Game, GameStatus, Line, Mark, Move, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An automated player started choosing a move.
    Thinking {
        /// Mark of the thinking player.
        mark: Mark,
    },
    /// Move was made.
    MoveMade {
        /// The move as applied to the board.
        mov: Move,
        /// Status after the move.
        status: GameStatus,
    },
    /// A player asked for a move the game refused. The same player moves again.
    Rejected {
        /// Mark of the player whose move was refused.
        mark: Mark,
        /// The refused position.
        position: Position,
        /// Why it was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Winning mark, `None` for a draw.
        winner: Option<Mark>,
        /// The completed line, if the game was won.
        line: Option<Line>,
    },
}

/// Orchestrates gameplay between two players.
///
/// The orchestrator owns the authoritative [`Game`]; the UI mirrors it from
/// the events it receives.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// The game as the orchestrator sees it.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game is over.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if player.is_automated() {
                self.event_tx.send(GameEvent::Thinking { mark })?;
            }

            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            match self.game.play(Move::new(mark, position)) {
                Ok(status) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        mov: Move::new(mark, position),
                        status,
                    })?;
                }
                Err(e) => {
                    warn!(%mark, %position, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::Rejected {
                        mark,
                        position,
                        reason: e.to_string(),
                    })?;
                }
            }
        }

        let winner = self.game.winner();
        info!(?winner, moves = self.game.history().len(), "Game over");
        self.event_tx.send(GameEvent::GameOver {
            winner,
            line: self.game.winning_line(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::players::{ComputerPlayer, HumanPlayer, MoveInput};
    use std::time::Duration;

    #[tokio::test]
    async fn test_rejected_move_is_retried() {
        let (input_tx, input) = MoveInput::channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        let mut orchestrator = Orchestrator::new(
            Box::new(HumanPlayer::new("Player X", input.clone())),
            Box::new(HumanPlayer::new("Player O", input)),
            event_tx,
        );

        // X wins the top row; O tries to reuse X's first square once.
        for pos in [
            Position::TopLeft,
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            input_tx.send(pos).unwrap();
        }

        orchestrator.run().await.unwrap();

        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }

        assert!(matches!(
            events[1],
            GameEvent::Rejected {
                mark: Mark::O,
                position: Position::TopLeft,
                ..
            }
        ));
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                winner: Some(Mark::X),
                line: Some([Position::TopLeft, Position::TopCenter, Position::TopRight]),
            })
        );
        assert_eq!(orchestrator.game().status(), GameStatus::Won(Mark::X));
    }

    #[tokio::test]
    async fn test_computer_vs_computer_draws() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(
            Box::new(ComputerPlayer::new(Mark::X, Duration::ZERO)),
            Box::new(ComputerPlayer::new(Mark::O, Duration::ZERO)),
            event_tx,
        );

        orchestrator.run().await.unwrap();

        let mut thinking = 0;
        let mut last = None;
        while let Ok(event) = event_rx.try_recv() {
            if matches!(event, GameEvent::Thinking { .. }) {
                thinking += 1;
            }
            last = Some(event);
        }

        assert_eq!(thinking, 9);
        assert_eq!(
            last,
            Some(GameEvent::GameOver {
                winner: None,
                line: None
            })
        );
    }
}
