//! UI rendering using ratatui.
//!
//! Rendering is stateless: every frame is derived from the [`App`] alone.

mod board;

use super::app::App;
use super::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;

/// Label on the reset button.
pub const RESET_LABEL: &str = "Reset Game";

const HELP: &str = "click or 1-9 / arrows+Enter: move   r: reset   q: quit";

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let layout = BoardLayout::new(f.area());
    let theme = app.theme();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    render_board(f, &layout, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(theme.status).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status);

    let reset = Paragraph::new(RESET_LABEL)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.grid)),
        );
    f.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(theme.grid))
        .alignment(Alignment::Center);
    f.render_widget(help, layout.help);
}
