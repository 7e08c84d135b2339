//! Non-interactive commands: position analysis and self-play.

use crate::{COMPUTER, GameSession, PLAYER};
use tictactoe_core::{Analysis, Board, BoardParseError, GameOutcome, Mark, MoveError, Position, analyze};
use tracing::{debug, info, instrument};

/// Parses `cells` and searches it for `side`.
///
/// Without an explicit side, the side to move is inferred from the mark
/// counts (X unless X has already moved more often than O).
#[instrument]
pub fn analyze_position(cells: &str, side: Option<Mark>) -> Result<Analysis, BoardParseError> {
    let board: Board = cells.parse()?;
    let side = side.unwrap_or_else(|| board.next_mark());
    debug!(board = %board, side = %side, "Analyzing position");
    Ok(analyze(&board, side))
}

/// One ply of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayTurn {
    /// Side that moved.
    pub mark: Mark,
    /// Cell it played.
    pub position: Position,
    /// Board after the move.
    pub board: Board,
}

/// A finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayGame {
    /// Every move in order.
    pub turns: Vec<SelfPlayTurn>,
    /// Final classification of the board.
    pub outcome: GameOutcome,
}

/// Plays the computer against its own hints until the game ends.
///
/// # Errors
///
/// Returns [`MoveError`] if a hinted move is rejected by the session.
#[instrument]
pub fn self_play() -> Result<SelfPlayGame, MoveError> {
    let mut session = GameSession::new();
    let mut turns = Vec::new();

    while !session.is_game_over() {
        let (mark, position) = if session.is_computer_turn() {
            let Some(position) = session.computer_move() else {
                break;
            };
            (COMPUTER, position)
        } else {
            let Some(position) = session.recommended_move() else {
                break;
            };
            session.player_move(position)?;
            (PLAYER, position)
        };
        turns.push(SelfPlayTurn {
            mark,
            position,
            board: *session.board(),
        });
    }

    let outcome = session.outcome();
    info!(outcome = %outcome, plies = turns.len(), "Self-play finished");
    Ok(SelfPlayGame { turns, outcome })
}
