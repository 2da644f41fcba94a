//! Game mode selection.

use noughts_core::Mark;
use strum::EnumIter;

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, clap::ValueEnum)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[value(name = "pvp")]
    PlayerVsPlayer,
    /// Human against the minimax computer.
    #[default]
    #[value(name = "computer")]
    PlayerVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer",
        }
    }

    /// Whether `mark` is played by the computer in this mode.
    pub fn is_computer(&self, mark: Mark, computer_mark: Mark) -> bool {
        matches!(self, GameMode::PlayerVsComputer) && mark == computer_mark
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
