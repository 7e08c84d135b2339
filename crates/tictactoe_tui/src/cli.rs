//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Do not highlight the recommended reply
        #[arg(long)]
        no_hints: bool,
    },

    /// Print the minimax evaluation of a position as JSON
    Analyze {
        /// Board as nine cells, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: String,

        /// Side to move (inferred from the mark counts if omitted)
        #[arg(short, long, value_enum)]
        side: Option<Side>,
    },

    /// Let the computer play both sides and print each position
    Selfplay,
}

/// Mark selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Maximizing side
    X,
    /// Minimizing side
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}
