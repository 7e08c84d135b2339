//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning combinations.
///
/// Order is fixed: rows top-to-bottom, columns left-to-right,
/// diagonal ↘, diagonal ↙. The first complete line in this order
/// is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", ret)]
pub fn check_winner(board: &Board) -> Option<Mark> {
    line_owner(board).map(|(mark, _)| mark)
}

/// Returns the first complete line, if any.
#[instrument(level = "trace", ret)]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    line_owner(board).map(|(_, line)| line)
}

/// Uninstrumented scan shared with the search hot path.
pub(crate) fn line_owner(board: &Board) -> Option<(Mark, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Some((mark, line));
        }
    }
    None
}
