//! Tests for key handling and computer pacing in the terminal app.

use crossterm::event::KeyCode;
use tictactoe_core::{Board, Mark, Position, Square};
use tictactoe_tui::{App, ComputerTurnDue, Settings};
use tokio::sync::mpsc;

fn new_app() -> (App, mpsc::UnboundedReceiver<ComputerTurnDue>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let settings = Settings::default().with_computer_delay_ms(500);
    (App::new(&settings, tx), rx)
}

#[tokio::test(start_paused = true)]
async fn test_computer_moves_when_due() {
    let (mut app, mut rx) = new_app();
    assert!(app.is_computer_thinking());
    assert_eq!(app.status_message(), "Computer is thinking...");

    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);

    assert_eq!(
        app.session().board().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );
    assert!(!app.is_computer_thinking());
    assert_eq!(app.hint(), Some(Position::Center));
    assert_eq!(
        app.status_message(),
        "Tip: Place your O in the green-highlighted square"
    );
}

#[tokio::test(start_paused = true)]
async fn test_digit_key_places_mark() {
    let (mut app, mut rx) = new_app();
    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);

    app.handle_key(KeyCode::Char('5'));

    assert_eq!(
        app.session().board().get(Position::Center),
        Square::Occupied(Mark::O)
    );
    assert_eq!(app.cursor(), Position::Center);
    assert!(app.session().is_computer_turn());
    assert!(app.is_computer_thinking());
}

#[tokio::test(start_paused = true)]
async fn test_rejected_move_shows_notice() {
    let (mut app, mut rx) = new_app();
    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);

    app.handle_key(KeyCode::Char('1'));

    assert_eq!(app.status_message(), "Square Top-left is already occupied");
    assert!(!app.session().is_computer_turn());
}

#[tokio::test(start_paused = true)]
async fn test_early_key_notice_cleared_by_computer_move() {
    let (mut app, mut rx) = new_app();

    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.status_message(), "It's not your turn");
    assert_eq!(app.session().board(), &Board::new());

    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);

    assert!(!app.session().is_computer_turn());
    assert_eq!(app.hint(), Some(Position::Center));
    assert_eq!(
        app.status_message(),
        "Tip: Place your O in the green-highlighted square"
    );
}

#[tokio::test(start_paused = true)]
async fn test_cursor_and_enter_place_mark() {
    let (mut app, mut rx) = new_app();
    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);

    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.cursor(), Position::BottomRight);

    app.handle_key(KeyCode::Enter);
    assert_eq!(
        app.session().board().get(Position::BottomRight),
        Square::Occupied(Mark::O)
    );
}

#[tokio::test(start_paused = true)]
async fn test_new_game_discards_pending_move() {
    let (mut app, mut rx) = new_app();

    // Let the first signal arrive, then reset before handling it
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
    app.handle_key(KeyCode::Char('n'));

    let stale = rx.recv().await.unwrap();
    app.on_computer_turn_due(stale);
    assert_eq!(app.session().board(), &Board::new());
    assert!(app.is_computer_thinking());

    let due = rx.recv().await.unwrap();
    app.on_computer_turn_due(due);
    assert_eq!(
        app.session().board().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );
}

#[tokio::test(start_paused = true)]
async fn test_quit_keys() {
    let (mut app, _rx) = new_app();
    assert!(!app.should_quit());

    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());
}
