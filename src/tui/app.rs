//! Application state and logic.

use super::input::{self, Action};
use super::layout::BoardLayout;
use crate::config::Theme;
use crossterm::event::Event;
use ratatui::layout::Rect;
use tictactoe_core::{Game, GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the [`Game`]; everything else here is presentation state. The
/// screen is redrawn from this struct after every handled event.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            theme,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Gets the keyboard cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the status line text.
    pub fn status_message(&self) -> String {
        self.game.state().status().to_string()
    }

    /// Handles a terminal event; `area` is the size of the last drawn frame.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event, area: Rect) {
        let action = match event {
            Event::Key(key) => input::key_action(*key, self.cursor),
            Event::Mouse(mouse) => input::mouse_action(*mouse, &BoardLayout::new(area)),
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Applies a UI action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(position) => {
                self.cursor = position;
                self.select(position);
            }
            Action::MoveCursor(position) => self.cursor = position,
            Action::Reset => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Requests a move at `position`.
    pub fn select(&mut self, position: Position) -> MoveOutcome {
        let outcome = self.game.request_move(position.to_index());
        if outcome.is_placed() {
            info!(%position, status = %self.status_message(), "Move accepted");
        }
        outcome
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
