//! Tic-tac-toe in the terminal.
//!
//! Two players share one terminal and take turns by clicking cells or using
//! the keyboard.
//!
//! # Architecture
//!
//! - **Rules**: pure game logic lives in the `tictactoe_core` crate and is
//!   re-exported here
//! - **App**: presentation state that owns the [`Game`] and routes every
//!   user action through it
//! - **UI**: stateless ratatui rendering plus the [`BoardLayout`] shared
//!   with mouse hit-testing
//! - **Config**: CLI flags and an optional TOML theme
//!
//! # Example
//!
//! ```
//! use tictactoe::{App, GameStatus, Player, Position};
//!
//! let mut app = App::default();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     app.select(pos);
//! }
//! assert_eq!(app.state().status(), GameStatus::Won(Player::X));
//! assert_eq!(app.status_message(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, Theme, ThemeConfig, load_theme};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, BOARD_HEIGHT, BOARD_WIDTH, BoardLayout, CELL_HEIGHT, CELL_WIDTH, RESET_LABEL,
    draw, key_action, mouse_action, move_cursor, render_board, run,
};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, Game, GameState, GameStatus, IgnoreReason, LINES, Mark, MoveOutcome, Player, Position,
    Square, check_winner, is_draw, is_full,
};
