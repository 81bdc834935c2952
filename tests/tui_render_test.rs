//! Rendering and mouse interaction tests against ratatui's `TestBackend`.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use strum::IntoEnumIterator;
use tictactoe::{App, BoardLayout, GameState, Player, Position, RESET_LABEL, Square, draw};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text_in(buffer: &Buffer, rect: Rect) -> String {
    let mut text = String::new();
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn screen(buffer: &Buffer) -> String {
    text_in(buffer, buffer.area)
}

fn click(app: &mut App, rect: Rect) {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_event(&event, area());
}

fn click_cell(app: &mut App, index: usize) {
    let layout = BoardLayout::new(area());
    click(app, layout.cells[index]);
}

#[test]
fn test_initial_screen() {
    let app = App::default();
    let buffer = render(&app);
    let screen = screen(&buffer);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains(RESET_LABEL));

    let layout = BoardLayout::new(area());
    for pos in Position::iter() {
        let cell = text_in(&buffer, layout.cell(pos));
        assert!(cell.trim().is_empty(), "{} should be blank: {:?}", pos, cell);
    }
}

#[test]
fn test_click_marks_cell_and_updates_status() {
    let mut app = App::default();
    click_cell(&mut app, 4);

    assert_eq!(
        app.state().board().get(Position::Center),
        Square::Occupied(Player::X)
    );

    let buffer = render(&app);
    let layout = BoardLayout::new(area());
    assert_eq!(text_in(&buffer, layout.cell(Position::Center)).trim(), "X");
    assert!(screen(&buffer).contains("Next player: O"));
}

#[test]
fn test_click_on_marked_cell_is_ignored() {
    let mut app = App::default();
    click_cell(&mut app, 0);
    let before = app.state().clone();

    click_cell(&mut app, 0);

    assert_eq!(app.state(), &before);
}

#[test]
fn test_row_win_by_clicks() {
    let mut app = App::default();
    for index in [0, 3, 1, 4, 2] {
        click_cell(&mut app, index);
    }

    let screen = screen(&render(&app));
    assert!(screen.contains("Player X wins!"), "{}", screen);

    // Further clicks change nothing.
    let won = app.state().clone();
    click_cell(&mut app, 8);
    assert_eq!(app.state(), &won);
}

#[test]
fn test_draw_by_clicks() {
    let mut app = App::default();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        click_cell(&mut app, index);
    }

    let screen = screen(&render(&app));
    assert!(screen.contains("It's a draw!"), "{}", screen);
}

#[test]
fn test_reset_button_restores_initial_state() {
    let mut app = App::default();
    for index in [0, 3, 1, 4, 2] {
        click_cell(&mut app, index);
    }

    let layout = BoardLayout::new(area());
    click(&mut app, layout.reset);
    assert_eq!(app.state(), &GameState::new());
    click(&mut app, layout.reset);
    assert_eq!(app.state(), &GameState::new());

    assert!(screen(&render(&app)).contains("Next player: X"));
}

#[test]
fn test_click_outside_board_is_ignored() {
    let mut app = App::default();
    let layout = BoardLayout::new(area());
    click(&mut app, layout.title);
    click(&mut app, layout.row_separators[0]);
    assert_eq!(app.state(), &GameState::new());
}

#[test]
fn test_small_terminal_renders_without_panic() {
    let app = App::default();
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
    terminal.draw(|f| draw(f, &app)).unwrap();
}
