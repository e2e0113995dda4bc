//! Noughts - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, ModeArg, PlayerArg};
use noughts::{AppConfig, run_tui};
use noughts_core::{Board, Player, analyze, evaluate};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let Cli { config, command } = Cli::parse();

    match command {
        Command::Play { mode, delay_ms } => run_play(&config, mode, delay_ms).await,
        Command::Suggest {
            board,
            player,
            json,
        } => run_suggest(&board, player, json),
    }
}

/// Run the terminal UI, logging to a file.
async fn run_play(config_path: &Path, mode: Option<ModeArg>, delay_ms: Option<u64>) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_overrides(mode.map(Into::into), delay_ms);

    initialize_file_tracing(config.log_file())?;
    info!(?config, "Configuration resolved");

    run_tui(&config).await
}

/// Print the optimal move for a board given on the command line.
#[instrument(skip(player, json))]
fn run_suggest(board: &str, player: PlayerArg, json: bool) -> Result<()> {
    initialize_stderr_tracing();

    let board: Board = board.parse().context("Invalid board")?;
    let player = Player::from(player);

    let status = evaluate(&board);
    if status.is_over() {
        bail!("Game is already over: {:?}", status);
    }

    let report = analyze(&board, player).context("No empty square to play")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let outcome = match *report.score() {
            1 => "win",
            0 => "draw",
            _ => "loss",
        };
        println!("{}\n", board.display());
        println!(
            "{} should play {} (key {}): forced {} with best play, {} positions searched",
            player,
            report.position(),
            report.position().to_index() + 1,
            outcome,
            report.nodes()
        );
    }

    Ok(())
}

fn initialize_file_tracing(path: &Path) -> Result<()> {
    // The TUI owns the terminal, so logs go to a file
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
