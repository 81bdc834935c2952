//! The game controller: the sole owner of mutable game state.

use crate::{GameState, Player, Position};
use tracing::{debug, instrument};

/// Why a move request was ignored.
///
/// Ignored requests are not errors: the state is left untouched and the
/// caller is free to discard the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The index is outside 0-8.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("{_0} is already marked")]
    Occupied(Position),
    /// A player has already won.
    #[display("player {_0} has already won")]
    GameOver(Player),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed {
        /// Player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// The request was a no-op.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game state.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Tic-tac-toe game controller.
///
/// Holds the current [`GameState`] and applies the two transitions:
/// [`Game::request_move`] and [`Game::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Requests a move at the given board index (0-8).
    ///
    /// Marks the square for the current player, re-evaluates the winner and
    /// passes the turn. The turn passes even on a winning move; later requests
    /// are ignored anyway. Requests for a marked square, an index off the
    /// board, or after a win leave the state unchanged.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn request_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            return self.ignore(IgnoreReason::OutOfRange(index));
        };

        if let Some(winner) = self.state.winner() {
            return self.ignore(IgnoreReason::GameOver(winner));
        }

        if !self.state.board().is_empty(position) {
            return self.ignore(IgnoreReason::Occupied(position));
        }

        let player = self.state.current_player();
        self.state.apply_move(position);
        debug!(
            %position,
            status = %self.state.status(),
            board = %self.state.board().display(),
            "Move placed"
        );

        MoveOutcome::Placed { player, position }
    }

    /// Replaces the state with the initial snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }

    fn ignore(&self, reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Move request ignored");
        MoveOutcome::Ignored(reason)
    }
}
