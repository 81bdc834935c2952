//! Tic-tac-toe board rendering.

use crate::tui::app::App;
use crate::tui::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tictactoe_core::{Player, Position, Square};

/// Renders the board: nine cells and the grid lines between them.
pub fn render_board(f: &mut Frame, layout: &BoardLayout, app: &App) {
    for pos in Position::ALL {
        render_square(f, layout.cell(pos), app, pos);
    }

    for area in layout.row_separators {
        render_separator(f, area, app.theme().grid);
    }

    for area in layout.col_separators.iter().flatten() {
        render_vertical_sep(f, *area, app.theme().grid);
    }
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: Position) {
    let theme = app.theme();
    let square = app.state().board().get(pos);

    let style = match square {
        Square::Empty => Style::default(),
        Square::Occupied(Player::X) => Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
    };

    let cell_style = if pos == app.cursor() {
        Style::default().bg(theme.highlight).fg(Color::Black)
    } else {
        Style::default()
    };

    // Mark on the middle row of the cell.
    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::styled(square.symbol(), style));

    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, color: Color) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(color));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, color: Color) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(color));
    f.render_widget(sep, area);
}
