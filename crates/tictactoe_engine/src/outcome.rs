//! Results and errors of engine operations.

use crate::{Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// What a cell click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveOutcome {
    /// The previous game was over; a new game began with X at `position`.
    #[display("New game: X plays {}", position)]
    Started {
        /// Opening square.
        position: Position,
    },
    /// A mark was placed and the game continues.
    #[display("{} plays {}", mark, position)]
    Placed {
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// A mark was placed and completed a line.
    #[display("{} wins", mark)]
    Won {
        /// Winning mark.
        mark: Mark,
        /// Completed line.
        line: [Position; 3],
    },
    /// A mark was placed and filled the board without a winner.
    #[display("{} plays {}; draw", mark, position)]
    Drawn {
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// The square was already occupied; nothing changed.
    #[display("{} is taken", position)]
    Ignored {
        /// Square clicked.
        position: Position,
    },
}

impl MoveOutcome {
    /// True if the click changed the current state.
    pub fn changed_state(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored { .. })
    }
}

/// Input rejected at the engine boundary. State is never mutated on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// Index received.
        index: usize,
    },
    /// History index past the last recorded snapshot.
    #[display("History index {} is out of range (history holds {} entries)", index, len)]
    HistoryOutOfRange {
        /// Index received.
        index: usize,
        /// History length at the time.
        len: usize,
    },
}
