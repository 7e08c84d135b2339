//! Terminal-state classification.

use super::draw::is_full;
use super::win::line_owner;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line and at least one empty square.
    Ongoing,
    /// A mark owns a complete line.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(*mark),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "{} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board: a line wins even on a full board.
#[instrument(level = "trace", ret)]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some((mark, _)) = line_owner(board) {
        GameOutcome::Won(mark)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
