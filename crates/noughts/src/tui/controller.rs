//! Controller that drives the screen state machine.

use super::menu::MenuScreen;
use super::screen::{Screen, ScreenTransition};
use super::session::GameSession;
use crate::config::Config;
use crate::mode::GameMode;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Active screen in the state machine.
enum ActiveScreen {
    Menu(MenuScreen),
    Game(GameSession),
}

impl ActiveScreen {
    fn as_screen(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }
}

/// Runs the start screen and game screens until the user quits.
#[derive(Debug)]
pub struct Controller {
    config: Config,
    start_mode: Option<GameMode>,
}

impl Controller {
    /// Creates a controller. With `start_mode` set the start screen is skipped.
    pub fn new(config: Config, start_mode: Option<GameMode>) -> Self {
        Self { config, start_mode }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting UI event loop");

        let mut screen = match self.start_mode {
            Some(mode) => ActiveScreen::Game(GameSession::start(mode, &self.config)),
            None => ActiveScreen::Menu(MenuScreen::new()),
        };

        loop {
            screen.as_screen().tick();
            terminal.draw(|f| match &screen {
                ActiveScreen::Menu(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
            })?;

            // Poll with a short timeout so orchestrator events keep flowing.
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = screen.as_screen().handle_key(key);
                debug!(?transition, "Screen transition");
                screen = match transition {
                    ScreenTransition::Stay => screen,
                    ScreenTransition::StartGame(mode) => {
                        info!(%mode, "Starting game");
                        ActiveScreen::Game(GameSession::start(mode, &self.config))
                    }
                    ScreenTransition::GoToMenu => ActiveScreen::Menu(MenuScreen::new()),
                    ScreenTransition::Quit => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }

            tokio::task::yield_now().await;
        }
    }
}
