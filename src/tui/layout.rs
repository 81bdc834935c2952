//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect};
use tictactoe_core::Position;
use tracing::instrument;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 12;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the board including the two vertical grid lines.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the board including the two horizontal grid lines.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const RESET_WIDTH: u16 = 18;

/// Where each element of the screen is drawn.
///
/// Computed from the terminal area alone, so the renderer and the mouse
/// handler always agree on which rectangle belongs to which cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title bar.
    pub title: Rect,
    /// The whole board, grid lines included.
    pub board: Rect,
    /// One rectangle per cell, indexed by board index (0-8).
    pub cells: [Rect; 9],
    /// Horizontal grid lines between rows.
    pub row_separators: [Rect; 2],
    /// Vertical grid lines between columns, per row.
    pub col_separators: [[Rect; 2]; 3],
    /// Status line.
    pub status: Rect,
    /// Reset button.
    pub reset: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl BoardLayout {
    /// Lays out the screen inside `area`.
    #[instrument]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(3),            // Reset button
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [[Rect::default(); 2]; 3];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);

            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row] = [cols[1], cols[3]];
        }

        let status = center_rect(chunks[2], BOARD_WIDTH, 3);
        let reset = center_rect(chunks[3], RESET_WIDTH, 3);

        Self {
            title: chunks[0],
            board,
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            status,
            reset,
            help: chunks[4],
        }
    }

    /// Returns the rectangle of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Returns the cell under the given screen coordinates, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Returns true if the coordinates fall on the reset button.
    pub fn is_reset(&self, column: u16, row: u16) -> bool {
        self.reset.contains(ScreenPosition::new(column, row))
    }
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout::new(Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_cells_have_full_size() {
        for rect in layout().cells {
            assert_eq!(rect.width, CELL_WIDTH);
            assert_eq!(rect.height, CELL_HEIGHT);
        }
    }

    #[test]
    fn test_cells_are_row_major() {
        let layout = layout();
        let top_left = layout.cell(Position::TopLeft);
        let top_right = layout.cell(Position::TopRight);
        let bottom_left = layout.cell(Position::BottomLeft);
        assert_eq!(top_left.y, top_right.y);
        assert!(top_left.x < top_right.x);
        assert_eq!(top_left.x, bottom_left.x);
        assert!(top_left.y < bottom_left.y);
    }

    #[test]
    fn test_hit_test_every_cell_center() {
        let layout = layout();
        for pos in Position::ALL {
            let rect = layout.cell(pos);
            let hit = layout.cell_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(pos));
        }
    }

    #[test]
    fn test_grid_lines_hit_nothing() {
        let layout = layout();
        let sep = layout.row_separators[0];
        assert_eq!(layout.cell_at(sep.x + 1, sep.y), None);
        let sep = layout.col_separators[1][0];
        assert_eq!(layout.cell_at(sep.x, sep.y), None);
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_reset_button_hit() {
        let layout = layout();
        let reset = layout.reset;
        assert!(layout.is_reset(reset.x, reset.y));
        assert!(layout.is_reset(reset.x + reset.width - 1, reset.y + reset.height - 1));
        assert!(!layout.is_reset(reset.x + reset.width, reset.y));
        assert_eq!(layout.cell_at(reset.x + 1, reset.y + 1), None);
    }
}
