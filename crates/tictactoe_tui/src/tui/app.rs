//! Application state and logic.

use super::input::{digit_position, move_cursor};
use crate::{ComputerTurnDue, ComputerTurnScheduler, GameSession, Settings};
use crossterm::event::KeyCode;
use tictactoe_core::{winning_line, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Wraps a [`GameSession`] with the cursor, the pending computer move,
/// and the last rejected-input notice.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    scheduler: ComputerTurnScheduler,
    cursor: Position,
    show_hints: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application and schedules the computer's opening move.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: &Settings, sender: mpsc::UnboundedSender<ComputerTurnDue>) -> Self {
        let mut app = Self {
            session: GameSession::new(),
            scheduler: ComputerTurnScheduler::new(settings.computer_delay(), sender),
            cursor: Position::Center,
            show_hints: *settings.show_hints(),
            notice: None,
            should_quit: false,
        };
        app.begin_computer_turn();
        app
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the computer's pause is running.
    pub fn is_computer_thinking(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// The cell to highlight as the player's recommended move.
    pub fn hint(&self) -> Option<Position> {
        if self.show_hints {
            self.session.recommended_move()
        } else {
            None
        }
    }

    /// The completed line to highlight once someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.session.board())
    }

    /// Text for the status banner.
    pub fn status_message(&self) -> String {
        if self.session.is_game_over()
            && let Some(banner) = self.session.banner()
        {
            return format!("{banner} Press 'n' for a new game or 'q' to quit.");
        }
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if self.is_computer_thinking() {
            return "Computer is thinking...".to_string();
        }
        if self.show_hints
            && let Some(banner) = self.session.banner()
        {
            return banner;
        }
        "Your turn. Arrows + Enter, or 1-9 to place your O.".to_string()
    }

    /// Handles a pause elapsing: plays the computer's move if still current.
    #[instrument(skip(self))]
    pub fn on_computer_turn_due(&mut self, due: ComputerTurnDue) {
        if !self.scheduler.accept(&due) {
            return;
        }
        if let Some(position) = self.session.computer_move() {
            // A rejection from the computer's turn no longer applies
            self.notice = None;
            debug!(position = %position, "Computer move applied to UI state");
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('r') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.place(position);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Restarts the game, dropping any pending computer move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.scheduler.cancel();
        self.session.reset();
        self.notice = None;
        self.begin_computer_turn();
    }

    fn place(&mut self, position: Position) {
        match self.session.player_move(position) {
            Ok(()) => {
                self.notice = None;
                self.begin_computer_turn();
            }
            Err(e) => {
                debug!(error = %e, position = %position, "Move rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn begin_computer_turn(&mut self) {
        if self.session.is_computer_turn() && !self.session.is_game_over() {
            self.scheduler.schedule();
        }
    }
}
