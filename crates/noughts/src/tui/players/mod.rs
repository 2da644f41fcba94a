//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, MoveInput};

use anyhow::Result;
use noughts_core::{Game, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for players that pick moves without keyboard input.
    fn is_automated(&self) -> bool {
        false
    }
}
