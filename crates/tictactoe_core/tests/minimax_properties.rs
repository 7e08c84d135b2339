//! Tests verifying the move selector plays tic-tac-toe perfectly.
//!
//! Perfect play in tic-tac-toe means:
//! - Never losing against any opponent
//! - Taking an immediate win when one exists
//! - Drawing against another perfect player

use tictactoe_core::{
    best_move, check_winner, is_draw, is_full, outcome, Board, GameOutcome, Mark, Position,
    Square, LINES,
};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

/// X plays `best_move`; O tries every legal reply. Returns the number of
/// finished games reached, asserting X never loses.
fn x_never_loses_from(board: Board) -> usize {
    match outcome(&board) {
        GameOutcome::Won(Mark::O) => panic!("O won against perfect X:\n{}", board.display()),
        GameOutcome::Won(Mark::X) | GameOutcome::Draw => return 1,
        GameOutcome::Ongoing => {}
    }

    let before = board;
    let mv = best_move(&board, Mark::X).expect("ongoing board has an empty cell");
    assert_eq!(board, before, "best_move modified its input");

    let mut after_x = board;
    after_x.set(mv, Square::Occupied(Mark::X));
    if outcome(&after_x).is_terminal() {
        return x_never_loses_from(after_x);
    }

    after_x
        .empty_positions()
        .into_iter()
        .map(|reply| {
            let mut next = after_x;
            next.set(reply, Square::Occupied(Mark::O));
            x_never_loses_from(next)
        })
        .sum()
}

#[test]
fn test_every_line_reports_its_owner() {
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let mut b = Board::new();
            for pos in line {
                b.set(pos, Square::Occupied(mark));
            }
            assert_eq!(check_winner(&b), Some(mark), "line {:?}", line);
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOX XOO OXX");
    assert_eq!(check_winner(&b), None);
    assert!(is_full(&b));
    assert!(is_draw(&b));
}

#[test]
fn test_completes_winning_row() {
    let b = board("XX. ... ...");
    assert_eq!(best_move(&b, Mark::X).map(Position::to_index), Some(2));
}

#[test]
fn test_first_player_never_loses() {
    let games = x_never_loses_from(Board::new());
    assert!(games > 0);
}

#[test]
fn test_no_blunder_after_corner_center_opening() {
    // X took a corner, O answered in the center; X to move.
    let b = board("X.. .O. ...");
    let games = x_never_loses_from(b);
    assert!(games > 0);
}

#[test]
fn test_perfect_play_both_sides_draws() {
    let mut b = Board::new();
    let mut side = Mark::X;

    while !outcome(&b).is_terminal() {
        let mv = best_move(&b, side).expect("ongoing board has an empty cell");
        b.set(mv, Square::Occupied(side));
        side = side.opponent();
    }

    assert_eq!(outcome(&b), GameOutcome::Draw, "final board:\n{}", b.display());
}

#[test]
fn test_perfect_play_draws_from_every_opening() {
    // The hint path: O answers with best_move for the minimizing side.
    for opening in Position::ALL {
        let mut b = Board::new();
        b.set(opening, Square::Occupied(Mark::X));
        let mut side = Mark::O;

        while !outcome(&b).is_terminal() {
            let mv = best_move(&b, side).expect("ongoing board has an empty cell");
            b.set(mv, Square::Occupied(side));
            side = side.opponent();
        }

        assert_eq!(outcome(&b), GameOutcome::Draw, "opening {}", opening);
    }
}

#[test]
fn test_input_board_is_unchanged() {
    for cells in ["...  ... ...", "X.. .O. ...", "XX. OO. X..", "XOX OXX OXO"] {
        let b = board(cells);
        let snapshot = b;
        let _ = best_move(&b, Mark::X);
        let _ = best_move(&b, Mark::O);
        assert_eq!(b, snapshot);
    }
}
