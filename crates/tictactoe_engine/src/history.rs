//! Ordered store of past snapshots.

use crate::BoardState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshots of the current game, indexed by move number.
///
/// Append-only until a move is played from an earlier snapshot; that move
/// discards every entry after the snapshot it branched from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) entries: Vec<BoardState>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first move of the session.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&BoardState> {
        self.entries.get(index)
    }

    /// Most recently recorded snapshot.
    pub fn latest(&self) -> Option<&BoardState> {
        self.entries.last()
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, BoardState> {
        self.entries.iter()
    }

    /// All snapshots as a slice.
    pub fn as_slice(&self) -> &[BoardState] {
        &self.entries
    }

    /// Keeps entries up to and including `move_number`; `None` keeps nothing.
    pub(crate) fn truncate_after(&mut self, move_number: Option<usize>) {
        let keep = move_number.map_or(0, |n| n + 1);
        if keep < self.entries.len() {
            debug!(
                kept = keep,
                discarded = self.entries.len() - keep,
                "Discarding forward history"
            );
        }
        self.entries.truncate(keep);
    }

    pub(crate) fn push(&mut self, state: BoardState) {
        self.entries.push(state);
    }

    /// Replaces the whole history with a single opening snapshot.
    pub(crate) fn restart_with(&mut self, state: BoardState) {
        self.entries.clear();
        self.entries.push(state);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a BoardState;
    type IntoIter = std::slice::Iter<'a, BoardState>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
