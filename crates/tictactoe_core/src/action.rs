//! Errors for malformed boards and rejected moves.

use super::Position;

/// Error that can occur when applying a move to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer is still to move.
    #[display("It's not your turn")]
    NotYourTurn,
}

impl std::error::Error for MoveError {}

/// Error that can occur when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}
