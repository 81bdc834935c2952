//! Derived game status.

use crate::rules;
use crate::{GameState, Player};
use serde::{Deserialize, Serialize};

/// Current status of the game, derived from a [`GameState`].
///
/// The `Display` form is the status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; the player is next to move.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Player {_0} wins!")]
    Won(Player),
    /// Board is full with no winner.
    #[display("It's a draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted or possible.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl GameState {
    /// Derives the status: a winner takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.current_player())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "Next player: X");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Player O wins!");
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_initial_status() {
        let state = GameState::new();
        assert_eq!(state.status(), GameStatus::InProgress(Player::X));
        assert!(!state.status().is_over());
    }
}
