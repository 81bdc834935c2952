//! Pure tic-tac-toe game logic.
//!
//! This crate has no terminal or I/O dependencies. It provides:
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`check_winner`] and draw detection ([`is_full`], [`is_draw`])
//! - **State**: [`GameState`] snapshots and the [`Game`] controller that
//!   accepts or silently ignores move requests
//! - **Status**: [`GameStatus`], the derived in-progress / won / drawn view

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod status;
mod types;

pub use game::{Game, IgnoreReason, MoveOutcome};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, LINES};
pub use status::GameStatus;
pub use types::{Board, GameState, Player, Square};

/// Alias for the symbol a player places.
pub type Mark = Player;
