//! Translation of keyboard and mouse events into UI actions.

use super::layout::BoardLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::Position;

/// Something the user asked the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate a cell: request a move there.
    Select(Position),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Activate the reset control.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an action, given the current cursor cell.
pub fn key_action(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Select),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(move_cursor(cursor, code)))
        }
        _ => None,
    }
}

/// Maps a left click on a cell or the reset button to an action.
pub fn mouse_action(mouse: MouseEvent, layout: &BoardLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.is_reset(mouse.column, mouse.row) {
                Some(Action::Reset)
            } else {
                layout.cell_at(mouse.column, mouse.row).map(Action::Select)
            }
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
