//! Human player fed by the board screen.

use super::Player;
use anyhow::Result;
use noughts_core::{Game, Position};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, instrument};

/// Receiving end of the positions chosen on the board screen.
///
/// Cloning shares the same channel, so both sides of a two-player game
/// read from one keyboard.
#[derive(Debug, Clone)]
pub struct MoveInput {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<Position>>>,
}

impl MoveInput {
    /// Creates a connected sender/input pair.
    pub fn channel() -> (mpsc::UnboundedSender<Position>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }

    async fn recv(&self) -> Option<Position> {
        self.rx.lock().await.recv().await
    }
}

/// Human player using keyboard input.
pub struct HumanPlayer {
    name: String,
    input: MoveInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: MoveInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, _game), fields(player = %self.name))]
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        match self.input.recv().await {
            Some(position) => {
                debug!(%position, "Human chose position");
                Ok(position)
            }
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_input_feeds_both_players() {
        let (tx, input) = MoveInput::channel();
        let mut x = HumanPlayer::new("Player X", input.clone());
        let mut o = HumanPlayer::new("Player O", input);
        let game = Game::new();

        tx.send(Position::Center).unwrap();
        tx.send(Position::TopLeft).unwrap();

        assert_eq!(x.get_move(&game).await.unwrap(), Position::Center);
        assert_eq!(o.get_move(&game).await.unwrap(), Position::TopLeft);
    }

    #[tokio::test]
    async fn test_closed_channel_is_an_error() {
        let (tx, input) = MoveInput::channel();
        drop(tx);
        let mut player = HumanPlayer::new("Player X", input);
        assert!(player.get_move(&Game::new()).await.is_err());
    }
}
