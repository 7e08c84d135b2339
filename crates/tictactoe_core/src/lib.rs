//! Tic-tac-toe core - board model and perfect-play move selection.
//!
//! This crate contains no I/O. Everything here is a pure function over a
//! board snapshot, so any presentation layer can hold the game state and
//! call in with a board to get a verdict or a move back.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: win/draw detection over the 8 [`LINES`]
//! - **Search**: exhaustive minimax ([`best_move`], [`analyze`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{best_move, Board, Mark, Position};
//!
//! let board: Board = "XX. ... ...".parse().unwrap();
//! assert_eq!(best_move(&board, Mark::X), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rules;
mod search;
mod types;

pub use action::{BoardParseError, MoveError};
pub use position::Position;
pub use rules::{
    check_winner, is_draw, is_full, outcome, winning_line, GameOutcome, LINES,
};
pub use search::{analyze, best_move, Analysis, MoveScore, DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE};
pub use types::{Board, Mark, Square};
