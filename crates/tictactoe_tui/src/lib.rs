//! Terminal tic-tac-toe against a perfect opponent.
//!
//! This crate is the presentation layer around [`tictactoe_core`]. It owns
//! the game state, paces the computer's moves, and draws the board.
//!
//! # Architecture
//!
//! - **Session**: explicit game state (board, turn flag, winner, hint)
//! - **Scheduler**: deferred computer move with cancellation on reset
//! - **Settings**: optional TOML configuration
//! - **TUI**: ratatui rendering and keyboard handling
//! - **Commands**: position analysis and self-play for the CLI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod logging;
mod scheduler;
mod session;
mod tui;

pub use commands::{SelfPlayGame, SelfPlayTurn, analyze_position, self_play};
pub use config::{ConfigError, Settings};
pub use logging::{DEFAULT_LOG_FILTER, env_filter};
pub use scheduler::{ComputerTurnDue, ComputerTurnScheduler};
pub use session::{GameSession, COMPUTER, PLAYER};
pub use tui::{run_tui, App};
