//! Screen trait and transition type for the UI state machine.

use crate::mode::GameMode;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a new game in the given mode.
    StartGame(GameMode),
    /// Return to the start screen.
    GoToMenu,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Called once per loop iteration before rendering.
    fn tick(&mut self) {}
}
