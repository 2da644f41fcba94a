//! Board screen: one running game wired to its orchestrator task.

use super::app::{App, AppAction};
use super::orchestrator::{GameEvent, Orchestrator};
use super::players::{ComputerPlayer, HumanPlayer, MoveInput, Player};
use super::screen::{Screen, ScreenTransition};
use super::ui;
use crate::config::Config;
use crate::mode::GameMode;
use crossterm::event::KeyEvent;
use noughts_core::{Mark, Position};
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// A game in progress on screen.
///
/// Dropping the session aborts its orchestrator task.
pub struct GameSession {
    app: App,
    config: Config,
    input_tx: mpsc::UnboundedSender<Position>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    task: JoinHandle<()>,
}

impl GameSession {
    /// Starts a game in `mode`. Must be called inside a tokio runtime.
    #[instrument(skip(config))]
    pub fn start(mode: GameMode, config: &Config) -> Self {
        let (input_tx, event_rx, task) = spawn_orchestrator(mode, config);
        Self {
            app: App::new(mode, *config.computer_mark()),
            config: config.clone(),
            input_tx,
            event_rx,
            task,
        }
    }

    /// Board screen state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Abandons the current game and starts over in the same mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.task.abort();
        let (input_tx, event_rx, task) = spawn_orchestrator(*self.app.mode(), &self.config);
        self.input_tx = input_tx;
        self.event_rx = event_rx;
        self.task = task;
        self.app.restart();
        info!("Game restarted");
    }
}

impl Screen for GameSession {
    fn render(&self, frame: &mut Frame) {
        ui::draw(frame, &self.app);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match self.app.handle_key(key) {
            AppAction::None => ScreenTransition::Stay,
            AppAction::Submit(position) => {
                if self.input_tx.send(position).is_err() {
                    warn!(%position, "Orchestrator is gone, move dropped");
                }
                ScreenTransition::Stay
            }
            AppAction::Restart => {
                self.restart();
                ScreenTransition::Stay
            }
            AppAction::Menu => ScreenTransition::GoToMenu,
            AppAction::Quit => ScreenTransition::Quit,
        }
    }

    fn tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.app.handle_event(event);
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn spawn_orchestrator(
    mode: GameMode,
    config: &Config,
) -> (
    mpsc::UnboundedSender<Position>,
    mpsc::UnboundedReceiver<GameEvent>,
    JoinHandle<()>,
) {
    let (input_tx, input) = MoveInput::channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let player = |mark: Mark| -> Box<dyn Player> {
        if mode.is_computer(mark, *config.computer_mark()) {
            Box::new(ComputerPlayer::new(mark, config.think_delay()))
        } else {
            Box::new(HumanPlayer::new(format!("Player {}", mark), input.clone()))
        }
    };
    let mut orchestrator = Orchestrator::new(player(Mark::X), player(Mark::O), event_tx);

    let task = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            warn!(error = %e, "Orchestrator stopped");
        }
    });

    (input_tx, event_rx, task)
}
