//! Computer player backed by the minimax move selector.

use super::Player;
use anyhow::Result;
use noughts_core::{Game, Mark, MoveSelector, Position};
use std::time::Duration;
use tracing::{debug, instrument};

/// Optimal computer opponent.
///
/// Waits `think_delay` before answering so the move does not appear
/// instantly, then runs the search on the blocking pool.
pub struct ComputerPlayer {
    name: String,
    selector: MoveSelector,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer playing `mark`.
    pub fn new(mark: Mark, think_delay: Duration) -> Self {
        Self {
            name: "Computer".to_string(),
            selector: MoveSelector::new(mark),
            think_delay,
        }
    }

    /// The mark this computer plays.
    pub fn mark(&self) -> Mark {
        self.selector.computer()
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(mark = %self.mark()))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        tokio::time::sleep(self.think_delay).await;

        let board = *game.board();
        let selector = self.selector;
        let position = tokio::task::spawn_blocking(move || selector.select_move(&board)).await??;

        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_computer_blocks() {
        // X: TopLeft, TopCenter / O: Center
        let game = Game::replay(&[Position::TopLeft, Position::Center, Position::TopCenter])
            .unwrap();
        let mut computer = ComputerPlayer::new(Mark::O, Duration::ZERO);
        assert_eq!(computer.get_move(&game).await.unwrap(), Position::TopRight);
    }

    #[tokio::test]
    async fn test_computer_refuses_finished_game() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ])
        .unwrap();
        let mut computer = ComputerPlayer::new(Mark::O, Duration::ZERO);
        assert!(computer.get_move(&game).await.is_err());
    }
}
