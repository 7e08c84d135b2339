//! Game state owned by the presentation layer.

use tictactoe_core::{best_move, outcome, Board, GameOutcome, Mark, MoveError, Position, Square};
use tracing::{debug, info, instrument, warn};

/// The computer's mark. It always moves first.
pub const COMPUTER: Mark = Mark::X;

/// The human player's mark.
pub const PLAYER: Mark = Mark::O;

/// One game of human (O) against computer (X).
///
/// The session is the only mutable state. The core is queried with a
/// board snapshot and never holds on to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    computer_turn: bool,
    game_over: bool,
    winner: Option<Mark>,
    recommended_move: Option<Position>,
}

impl GameSession {
    /// Creates a new game with an empty board and the computer to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            computer_turn: true,
            game_over: false,
            winner: None,
            recommended_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True while the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.computer_turn
    }

    /// True once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winning mark, if the game ended in a win.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The optimal reply for the player, shown after each computer move.
    pub fn recommended_move(&self) -> Option<Position> {
        self.recommended_move
    }

    /// Classification of the current board.
    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    /// Plays the computer's move and computes the player's hint.
    ///
    /// Does nothing and returns `None` unless it is the computer's turn
    /// and the game is still running.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn computer_move(&mut self) -> Option<Position> {
        if !self.computer_turn || self.game_over {
            debug!("Not the computer's turn, ignoring");
            return None;
        }

        let Some(position) = best_move(&self.board, COMPUTER) else {
            warn!("Computer asked to move on a full board");
            return None;
        };

        self.board.set(position, Square::Occupied(COMPUTER));
        self.computer_turn = false;
        info!(position = %position, "Computer played");

        match self.outcome() {
            GameOutcome::Won(mark) => self.finish(Some(mark)),
            GameOutcome::Draw => self.finish(None),
            GameOutcome::Ongoing => {
                self.recommended_move = best_move(&self.board, PLAYER);
                debug!(hint = ?self.recommended_move, "Recommended reply computed");
            }
        }

        Some(position)
    }

    /// Places the player's mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended
    /// - [`MoveError::NotYourTurn`] while the computer is to move
    /// - [`MoveError::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn player_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if self.computer_turn {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(position, Square::Occupied(PLAYER));
        self.recommended_move = None;
        info!(position = %position, "Player played");

        match self.outcome() {
            GameOutcome::Won(mark) => self.finish(Some(mark)),
            GameOutcome::Draw => self.finish(None),
            GameOutcome::Ongoing => self.computer_turn = true,
        }

        Ok(())
    }

    /// Starts over: empty board, computer to move, no winner, no hint.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Message for the status banner, if one applies.
    pub fn banner(&self) -> Option<String> {
        if self.game_over {
            return Some(match self.winner {
                Some(COMPUTER) => "Winner: Computer".to_string(),
                Some(_) => "Winner: Player".to_string(),
                None => "Draw!".to_string(),
            });
        }

        if !self.computer_turn && self.recommended_move.is_some() {
            return Some(format!(
                "Tip: Place your {} in the green-highlighted square",
                PLAYER
            ));
        }

        None
    }

    fn finish(&mut self, winner: Option<Mark>) {
        self.game_over = true;
        self.winner = winner;
        self.recommended_move = None;
        info!(winner = ?winner, "Game over");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
