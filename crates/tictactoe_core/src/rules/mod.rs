//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Rules are kept
//! apart from the state holder so they can be tested over arbitrary grids.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};
