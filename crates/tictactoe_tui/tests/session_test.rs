//! Tests for the game session state machine.

use tictactoe_core::{Board, GameOutcome, Mark, MoveError, Position, Square};
use tictactoe_tui::{COMPUTER, GameSession, PLAYER};

/// Plays the session to the end with `choose` picking the player's moves.
fn play_out(session: &mut GameSession, choose: impl Fn(&GameSession) -> Position) {
    while !session.is_game_over() {
        if session.is_computer_turn() {
            assert!(session.computer_move().is_some());
        } else {
            let position = choose(session);
            session.player_move(position).unwrap();
        }
    }
}

#[test]
fn test_new_session_starts_with_computer() {
    let session = GameSession::new();
    assert_eq!(session.board(), &Board::new());
    assert!(session.is_computer_turn());
    assert!(!session.is_game_over());
    assert_eq!(session.winner(), None);
    assert_eq!(session.recommended_move(), None);
    assert_eq!(session.banner(), None);
}

#[test]
fn test_player_cannot_move_before_computer() {
    let mut session = GameSession::new();
    assert_eq!(
        session.player_move(Position::Center),
        Err(MoveError::NotYourTurn)
    );
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_computer_opens_top_left_and_hints_center() {
    let mut session = GameSession::new();
    assert_eq!(session.computer_move(), Some(Position::TopLeft));

    assert_eq!(
        session.board().get(Position::TopLeft),
        Square::Occupied(COMPUTER)
    );
    assert!(!session.is_computer_turn());
    // Center is O's only non-losing reply to a corner opening
    assert_eq!(session.recommended_move(), Some(Position::Center));
    assert_eq!(
        session.banner().as_deref(),
        Some("Tip: Place your O in the green-highlighted square")
    );
}

#[test]
fn test_occupied_square_is_rejected() {
    let mut session = GameSession::new();
    session.computer_move();

    assert_eq!(
        session.player_move(Position::TopLeft),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert!(!session.is_computer_turn());
    assert_eq!(session.recommended_move(), Some(Position::Center));
}

#[test]
fn test_player_move_hands_turn_back() {
    let mut session = GameSession::new();
    session.computer_move();
    session.player_move(Position::Center).unwrap();

    assert_eq!(session.board().get(Position::Center), Square::Occupied(PLAYER));
    assert!(session.is_computer_turn());
    assert_eq!(session.recommended_move(), None);
    assert_eq!(session.banner(), None);
}

#[test]
fn test_computer_move_ignored_on_player_turn() {
    let mut session = GameSession::new();
    session.computer_move();
    let before = session.clone();

    assert_eq!(session.computer_move(), None);
    assert_eq!(session, before);
}

#[test]
fn test_careless_player_loses() {
    let mut session = GameSession::new();
    play_out(&mut session, |s| s.board().empty_positions()[0]);

    assert_eq!(session.winner(), Some(Mark::X));
    assert_eq!(session.outcome(), GameOutcome::Won(Mark::X));
    assert_eq!(session.banner().as_deref(), Some("Winner: Computer"));
    assert_eq!(session.recommended_move(), None);
    assert_eq!(
        session.player_move(Position::BottomRight),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_following_hints_draws() {
    let mut session = GameSession::new();
    play_out(&mut session, |s| s.recommended_move().unwrap());

    assert_eq!(session.winner(), None);
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert_eq!(session.banner().as_deref(), Some("Draw!"));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut session = GameSession::new();
    play_out(&mut session, |s| s.board().empty_positions()[0]);
    assert!(session.is_game_over());

    session.reset();
    assert_eq!(session, GameSession::new());
    assert_eq!(session.computer_move(), Some(Position::TopLeft));
}
