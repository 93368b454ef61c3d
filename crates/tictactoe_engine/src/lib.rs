//! Tic-tac-toe engine with move history and replay.
//!
//! The engine owns one current [`BoardState`] and the [`History`] of the game
//! being played. Views drive it with two inputs and render whatever it
//! exposes:
//!
//! - [`GameEngine::apply_move`] for a click on a cell. On a finished game it
//!   starts a new one; on an occupied square it does nothing; otherwise it
//!   plays the mark of the player to move, discarding any forward history
//!   first when the current state was selected from the past.
//! - [`GameEngine::select_history`] for a click on a past snapshot.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.state().status(), GameStatus::Won(Mark::X));
//!
//! engine.select_history(1)?;
//! engine.apply_move(8)?;
//! assert_eq!(engine.history().len(), 3);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod history;
mod outcome;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::GameEngine;
pub use history::History;
pub use outcome::{EngineError, MoveOutcome};
pub use position::Position;
pub use rules::{check_winner, WinningLine};
pub use state::{BoardState, GameStatus, Highlight};
pub use types::{Board, Mark, Square};
