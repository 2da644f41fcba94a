//! Start screen: pick a game mode or quit.

use super::screen::{Screen, ScreenTransition};
use super::ui::center_rect;
use crate::mode::GameMode;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// Entries on the start screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuOption {
    /// Start a two-player game.
    PlayerVsPlayer,
    /// Start a game against the computer.
    PlayerVsComputer,
    /// Exit.
    Quit,
}

impl MenuOption {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::PlayerVsPlayer => GameMode::PlayerVsPlayer.name(),
            MenuOption::PlayerVsComputer => GameMode::PlayerVsComputer.name(),
            MenuOption::Quit => "Quit",
        }
    }

    fn transition(self) -> ScreenTransition {
        match self {
            MenuOption::PlayerVsPlayer => ScreenTransition::StartGame(GameMode::PlayerVsPlayer),
            MenuOption::PlayerVsComputer => {
                ScreenTransition::StartGame(GameMode::PlayerVsComputer)
            }
            MenuOption::Quit => ScreenTransition::Quit,
        }
    }
}

/// State for the start screen.
#[derive(Debug)]
pub struct MenuScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
}

impl MenuScreen {
    /// Creates the start screen with the first entry selected.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: MenuOption::iter().collect(),
            list_state,
        }
    }

    /// Currently highlighted entry.
    pub fn selected(&self) -> Option<MenuOption> {
        self.list_state
            .selected()
            .and_then(|i| self.options.get(i).copied())
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.options.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn render(&self, frame: &mut Frame) {
        let area = center_rect(frame.area(), 40, 11);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| ListItem::new(option.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Choose mode"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Select | Enter: Start | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected() {
                Some(option) => {
                    info!(option = option.label(), "Menu option chosen");
                    option.transition()
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => {
                debug!("Unhandled key on start screen");
                ScreenTransition::Stay
            }
        }
    }
}
