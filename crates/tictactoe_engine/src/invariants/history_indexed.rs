//! History indexing invariant: snapshots sit at their move number.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `history[i]` has move number `i`, and the current state is
/// either the fresh board with an empty history or one of the recorded snapshots.
pub struct HistoryIndexedInvariant;

impl Invariant<GameEngine> for HistoryIndexedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let indexed = engine
            .history()
            .iter()
            .enumerate()
            .all(|(i, snapshot)| snapshot.move_number() == Some(i));

        let current = engine.state();
        let current_recorded = match current.move_number() {
            None => engine.history().is_empty() && current.board().is_blank(),
            Some(n) => engine.history().get(n) == Some(current),
        };

        indexed && current_recorded
    }

    fn description() -> &'static str {
        "Snapshots are indexed by move number and the current state is recorded"
    }
}
