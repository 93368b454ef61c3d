//! Tic-tac-toe Replay - terminal front end
//!
//! Plays the game in a terminal UI or drives the engine headlessly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use script::ScriptStep;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play {
        highlight_ms: None,
        log_file: None,
    }) {
        Command::Play {
            highlight_ms,
            log_file,
        } => run_play(config.with_overrides(highlight_ms, log_file)).await,
        Command::Script { clicks, json } => run_script(&config, &clicks, json),
    }
}

/// Run the terminal UI, logging to a file
async fn run_play(config: AppConfig) -> Result<()> {
    initialize_file_tracing(&config)?;
    tui::run_tui(&config).await
}

/// Run a headless click script, logging to stderr
fn run_script(config: &AppConfig, clicks: &[ScriptStep], json: bool) -> Result<()> {
    initialize_stderr_tracing(config);

    let engine = script::run_steps(clicks)?;
    info!(status = %engine.state().status(), history_len = engine.history().len(), "Script finished");

    if json {
        println!("{}", script::render_json(&engine)?);
    } else {
        print!("{}", script::render_report(&engine));
    }
    Ok(())
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they don't interfere with the TUI.
fn initialize_file_tracing(config: &AppConfig) -> Result<()> {
    let path: &PathBuf = config.log_file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn initialize_stderr_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
