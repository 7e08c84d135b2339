//! Draw detection logic for tic-tac-toe.

use super::win::line_owner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", ret)]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a finished draw: full and nobody has a line.
#[instrument(level = "trace", ret)]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && line_owner(board).is_none()
}
