//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::{ComputerTurnDue, Settings, env_filter};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    // Log to a file so output does not interfere with the terminal
    let log_file = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        computer_delay_ms = settings.computer_delay_ms(),
        show_hints = settings.show_hints(),
        "Starting tic-tac-toe TUI"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(&settings, tx);

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic-tac-toe TUI exited");

    res
}

/// Draws, applies due computer moves, and dispatches key presses.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    due_rx: &mut mpsc::UnboundedReceiver<ComputerTurnDue>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(due) = due_rx.try_recv() {
            app.on_computer_turn_due(due);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }

        // Let the scheduler's timers run between polls
        tokio::task::yield_now().await;
    }
}
