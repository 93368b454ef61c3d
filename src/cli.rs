//! Command-line interface for tictactoe_replay.

use crate::script::ScriptStep;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a clickable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Two-player tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictactoe_replay.toml")]
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
        /// Milliseconds the move highlight stays visible (0 keeps it on)
        #[arg(long)]
        highlight_ms: Option<u64>,

        /// File receiving log output while the UI owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of clicks headlessly and print the result
    Script {
        /// Comma-separated steps: cell indices 0-8 or labels, `h<N>` selects history entry N
        #[arg(long, value_delimiter = ',', required = true)]
        clicks: Vec<ScriptStep>,

        /// Print the current state and history as JSON
        #[arg(long)]
        json: bool,
    },
}
