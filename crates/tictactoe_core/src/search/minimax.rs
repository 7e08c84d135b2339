//! Recursive minimax scoring.

use super::{DRAW_SCORE, O_WIN_SCORE, X_WIN_SCORE};
use crate::rules::line_owner;
use crate::{Board, Mark, Position, Square};

/// Scores positions by full-depth search, counting visited nodes.
#[derive(Debug, Default)]
pub(super) struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub(super) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with `to_move` about to play.
    ///
    /// Every move placed on `board` is removed before returning.
    pub(super) fn score(&mut self, board: &mut Board, to_move: Mark) -> i32 {
        self.nodes += 1;

        if let Some((winner, _)) = line_owner(board) {
            return terminal_score(winner);
        }

        let maximizing = to_move.is_maximizing();
        let mut best: Option<i32> = None;

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.set(pos, Square::Occupied(to_move));
            let score = self.score(board, to_move.opponent());
            board.set(pos, Square::Empty);

            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        // No empty cell and no line: the board is full.
        best.unwrap_or(DRAW_SCORE)
    }
}

fn terminal_score(winner: Mark) -> i32 {
    match winner {
        Mark::X => X_WIN_SCORE,
        Mark::O => O_WIN_SCORE,
    }
}
