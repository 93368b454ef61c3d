//! Headless driver: applies a list of clicks and reports the result.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_engine::{BoardState, GameEngine, Position};
use tracing::{info, instrument};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Click a board cell.
    Cell(Position),
    /// Click history entry `N`.
    Select(usize),
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid step '{}': expected a cell 0-8, a cell label, or h<N>", input)]
pub struct ScriptStepError {
    /// The offending token.
    pub input: String,
}

impl FromStr for ScriptStep {
    type Err = ScriptStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ScriptStepError { input: s.to_string() };

        if let Some(index) = s.strip_prefix(['h', 'H']) {
            if let Ok(index) = index.parse::<usize>() {
                return Ok(ScriptStep::Select(index));
            }
        }
        Position::from_label_or_number(s)
            .map(ScriptStep::Cell)
            .ok_or_else(invalid)
    }
}

/// Applies `steps` to a fresh engine.
///
/// # Errors
///
/// Fails on the first history selection past the recorded snapshots.
#[instrument(skip(steps), fields(step_count = steps.len()))]
pub fn run_steps(steps: &[ScriptStep]) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    for (n, step) in steps.iter().enumerate() {
        match *step {
            ScriptStep::Cell(position) => {
                let outcome = engine.apply_position(position);
                info!(step = n, %outcome, "Applied click");
            }
            ScriptStep::Select(index) => {
                engine
                    .select_history(index)
                    .with_context(|| format!("step {} (h{})", n + 1, index))?;
                info!(step = n, index, "Selected history entry");
            }
        }
    }
    Ok(engine)
}

/// Plain-text report: board, status line, and one row per history entry.
pub fn render_report(engine: &GameEngine) -> String {
    let state = engine.state();
    let mut out = format!("{}\n\n{}\n\nHistory:\n", state.board().display(), state.status_line());
    if engine.history().is_empty() {
        out.push_str("  (empty)\n");
    }
    for (i, snapshot) in engine.history().iter().enumerate() {
        let marker = if state.move_number() == Some(i) { '>' } else { ' ' };
        out.push_str(&format!("{} #{} {} {}\n", marker, i, snapshot.board().compact(), summary(snapshot)));
    }
    out
}

/// JSON report of the current state and history.
pub fn render_json(engine: &GameEngine) -> Result<String> {
    let report = serde_json::json!({
        "state": engine.state(),
        "status": engine.state().status(),
        "history": engine.history().as_slice(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

fn summary(snapshot: &BoardState) -> String {
    match snapshot.winner() {
        Some(mark) => format!("({} wins)", mark),
        None if snapshot.is_ended() => "(draw)".to_string(),
        None => String::new(),
    }
}
