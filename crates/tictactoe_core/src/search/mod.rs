//! Perfect-play move selection.
//!
//! Exhaustive minimax over the remaining game tree. Scores are always
//! from X's point of view: X maximizes, O minimizes. There is no depth
//! discount, no pruning and no transposition table; a 3x3 board has at
//! most 9! leaves, which is small enough to search in full every move.

mod minimax;

use crate::{Board, Mark, Position, Square};
use minimax::Searcher;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

/// Terminal score when X owns a line.
pub const X_WIN_SCORE: i32 = 10;

/// Terminal score when O owns a line.
pub const O_WIN_SCORE: i32 = -10;

/// Terminal score for a full board with no line.
pub const DRAW_SCORE: i32 = 0;

/// A candidate move and the score it leads to under optimal counter-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// The cell played.
    pub position: Position,
    /// Board index of `position` (0-8).
    pub index: usize,
    /// Minimax score after playing `position`.
    pub score: i32,
}

impl MoveScore {
    fn new(position: Position, score: i32) -> Self {
        Self {
            position,
            index: position.to_index(),
            score,
        }
    }
}

/// Full result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    board: Board,
    side: Mark,
    best: Option<MoveScore>,
    candidates: Vec<MoveScore>,
    nodes: u64,
}

impl Analysis {
    /// The board that was searched.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn side(&self) -> Mark {
        self.side
    }

    /// The chosen move, `None` on a full board.
    pub fn best_move(&self) -> Option<Position> {
        self.best.map(|m| m.position)
    }

    /// Score of the chosen move.
    pub fn best_score(&self) -> Option<i32> {
        self.best.map(|m| m.score)
    }

    /// Every empty cell with its score, in index order.
    pub fn candidates(&self) -> &[MoveScore] {
        &self.candidates
    }

    /// Number of game-tree nodes evaluated.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Returns the optimal cell for `side`, or `None` if no cell is empty.
///
/// Among equally scored moves the lowest index wins. The caller's board
/// is never modified; the search mutates a private copy and undoes every
/// exploratory move before returning.
///
/// Callers should not ask for a move on a board that already has a winner.
pub fn best_move(board: &Board, side: Mark) -> Option<Position> {
    analyze(board, side).best_move()
}

/// Searches every empty cell for `side` and reports all scores.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, side: Mark) -> Analysis {
    let started = Instant::now();
    let mut work = *board;
    let mut searcher = Searcher::default();
    let mut best: Option<MoveScore> = None;
    let mut candidates = Vec::new();

    for pos in Position::ALL {
        if !work.is_empty(pos) {
            continue;
        }

        work.set(pos, Square::Occupied(side));
        let score = searcher.score(&mut work, side.opponent());
        work.set(pos, Square::Empty);

        let candidate = MoveScore::new(pos, score);
        // Strict comparison keeps the first of equally good moves.
        let improves = match best {
            None => true,
            Some(current) if side.is_maximizing() => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(candidate);
        }
        candidates.push(candidate);
    }

    debug_assert_eq!(&work, board, "exploratory moves must be undone");

    debug!(
        best = ?best.map(|m| m.position),
        score = ?best.map(|m| m.score),
        nodes = searcher.nodes(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Search complete"
    );

    Analysis {
        board: *board,
        side,
        best,
        candidates,
        nodes: searcher.nodes(),
    }
}
