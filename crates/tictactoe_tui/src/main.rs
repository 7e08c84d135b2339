//! Tic-tac-toe command-line entry point.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_core::Mark;
use tictactoe_tui::{Settings, analyze_position, env_filter, run_tui, self_play};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        delay_ms: None,
        no_hints: false,
    }) {
        Command::Play { delay_ms, no_hints } => run_play(&cli.config, delay_ms, no_hints).await,
        Command::Analyze { board, side } => run_analyze(&board, side.map(Into::into)),
        Command::Selfplay => run_selfplay(),
    }
}

/// Logs to stderr so stdout stays clean for command output.
fn initialize_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive terminal game
async fn run_play(config: &Path, delay_ms: Option<u64>, no_hints: bool) -> Result<()> {
    let mut settings = Settings::load_or_default(config)?;
    if let Some(delay_ms) = delay_ms {
        settings = settings.with_computer_delay_ms(delay_ms);
    }
    if no_hints {
        settings = settings.with_show_hints(false);
    }

    run_tui(settings).await
}

/// Print the evaluation of every legal move for one position
#[instrument]
fn run_analyze(board: &str, side: Option<Mark>) -> Result<()> {
    initialize_tracing();

    let analysis =
        analyze_position(board, side).with_context(|| format!("Invalid board {board:?}"))?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}

/// Computer against its own hints until the game ends
fn run_selfplay() -> Result<()> {
    initialize_tracing();
    info!("Starting self-play");

    let game = self_play()?;
    for turn in &game.turns {
        println!("{} plays {}\n{}\n", turn.mark, turn.position, turn.board.display());
    }
    println!("{}", game.outcome);

    Ok(())
}
