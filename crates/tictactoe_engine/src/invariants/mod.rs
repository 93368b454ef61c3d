//! First-class invariants for the replay engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are asserted in debug builds and testable on their own.

use crate::{BoardState, GameEngine};

pub mod alternating_turn;
pub mod highlight_consistent;
pub mod history_indexed;

pub use alternating_turn::AlternatingTurnInvariant;
pub use highlight_consistent::HighlightConsistentInvariant;
pub use history_indexed::HistoryIndexedInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every engine invariant as a composable set.
pub type ReplayInvariants = (
    HistoryIndexedInvariant,
    AlternatingTurnInvariant,
    HighlightConsistentInvariant,
);

/// Panics in debug builds if any engine invariant is violated.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = ReplayInvariants::check_all(engine) {
            panic!("Engine invariants violated: {:?}", violations);
        }
    }
}

/// The recorded snapshots followed by the current one.
fn snapshots(engine: &GameEngine) -> impl Iterator<Item = &BoardState> {
    engine.history().iter().chain(std::iter::once(engine.state()))
}
