//! Connect-N Setup - CLI
//!
//! Interactive board setup, plus headless checks of the same rules.

#![warn(missing_docs)]

mod cli;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use connectn_setup::{
    ConfigValidator, FieldId, LobbyController, ScreenTransition, SetupSession, Settings,
    TransitionOutbox,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&cli.config, &cli.log_file),
        Command::Check { width, height, n } => {
            initialize_stderr_tracing();
            run_check(&cli.config, &width, &height, &n)
        }
        Command::Handoff {
            width,
            height,
            n,
            player1,
            player2,
        } => {
            initialize_stderr_tracing();
            run_handoff(&cli.config, [width, height, n, player1, player2])
        }
        Command::DefaultConfig => {
            print!("{}", Settings::default_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the interactive setup screen
fn run_play(config: &Path, log_file: &Path) -> Result<ExitCode> {
    // Setup logging to file to avoid interfering with TUI
    let log = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Connect-N setup TUI");
    let settings = Settings::load_or_default(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = LobbyController::new(settings);
    let result = controller.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map(|()| ExitCode::SUCCESS)
}

/// Validate raw width/height/n text and print the verdict
#[instrument(skip(config))]
fn run_check(config: &Path, width: &str, height: &str, n: &str) -> Result<ExitCode> {
    let settings = Settings::load_or_default(config)?;
    let validator = ConfigValidator::new(*settings.rules());
    match validator.check(width, height, n) {
        Ok(board) => {
            println!(
                "valid: {}x{} board, connect {}",
                board.width(),
                board.height(),
                board.n()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("invalid: {}", e.kind);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Drive a setup session without a terminal and print what it hands off
#[instrument(skip(config))]
fn run_handoff(config: &Path, texts: [String; 5]) -> Result<ExitCode> {
    let settings = Settings::load_or_default(config)?;
    let mut session = SetupSession::new(*settings.rules());
    for (id, text) in [
        FieldId::Width,
        FieldId::Height,
        FieldId::N,
        FieldId::Player1,
        FieldId::Player2,
    ]
    .into_iter()
    .zip(texts)
    {
        session.edit(id, text);
    }

    let mut outbox = TransitionOutbox::default();
    if session.confirm(&mut outbox).is_none() {
        warn!("Setup is invalid, nothing handed off");
        println!("invalid board configuration");
        return Ok(ExitCode::FAILURE);
    }
    match outbox.take() {
        ScreenTransition::Navigate { target, payload } => {
            info!(%target, "Printing hand-off payload");
            println!("{}", payload.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        other => anyhow::bail!("Unexpected transition after launch: {:?}", other),
    }
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}
