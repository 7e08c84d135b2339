//! Tests for the analyze and self-play commands.

use tictactoe_core::{BoardParseError, GameOutcome, Mark, Position, X_WIN_SCORE, is_full};
use tictactoe_tui::{analyze_position, self_play};

#[test]
fn test_analyze_infers_side_from_counts() {
    let after_opening = analyze_position("X........", None).unwrap();
    assert_eq!(after_opening.side(), Mark::O);
    assert_eq!(after_opening.best_move(), Some(Position::Center));

    let even = analyze_position("XO.......", None).unwrap();
    assert_eq!(even.side(), Mark::X);
}

#[test]
fn test_analyze_explicit_side_overrides_counts() {
    let analysis = analyze_position("XX. OO. X..", Some(Mark::X)).unwrap();
    assert_eq!(analysis.side(), Mark::X);
    assert_eq!(analysis.best_move(), Some(Position::TopRight));
    assert_eq!(analysis.best_score(), Some(X_WIN_SCORE));
}

#[test]
fn test_analyze_rejects_malformed_board() {
    assert_eq!(
        analyze_position("XO.", None).unwrap_err(),
        BoardParseError::WrongCellCount(3)
    );
    assert_eq!(
        analyze_position("XO?......", None).unwrap_err(),
        BoardParseError::InvalidCell('?')
    );
}

#[test]
fn test_self_play_always_draws() {
    let game = self_play().unwrap();

    assert_eq!(game.outcome, GameOutcome::Draw);
    assert_eq!(game.turns.len(), 9);
    assert_eq!(game.turns[0].mark, Mark::X);
    assert_eq!(game.turns[0].position, Position::TopLeft);
    assert_eq!(game.turns[1].mark, Mark::O);
    assert_eq!(game.turns[1].position, Position::Center);
    assert!(game.turns.windows(2).all(|w| w[0].mark != w[1].mark));

    let last = game.turns.last().unwrap();
    assert!(is_full(&last.board));
}
