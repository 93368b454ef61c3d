//! Alternating turn invariant: X and O take turns, X first.

use super::{snapshots, Invariant};
use crate::{BoardState, GameEngine, Mark};

/// Invariant: in every snapshot X has as many marks as O when X is to move,
/// and exactly one more when O is to move.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn holds_for(state: &BoardState) -> bool {
        let x = state.board().marks_of(Mark::X);
        let o = state.board().marks_of(Mark::O);
        match state.to_move() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }
}

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        snapshots(engine).all(Self::holds_for)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_a_won_game() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 3, 4, 6] {
            engine.apply_move(cell).unwrap();
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
        assert_eq!(engine.state().winner(), Some(Mark::X));
    }

    #[test]
    fn test_detects_double_move() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        engine.current.to_move = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
