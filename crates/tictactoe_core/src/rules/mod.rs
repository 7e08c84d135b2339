//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the presentation layer share one verdict.

mod draw;
mod outcome;
mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{outcome, GameOutcome};
pub use win::{check_winner, winning_line, LINES};

pub(crate) use win::line_owner;
