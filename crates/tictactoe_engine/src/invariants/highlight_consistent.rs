//! Highlight consistency invariant: the highlight agrees with the board.

use super::{snapshots, Invariant};
use crate::rules::check_winner;
use crate::{BoardState, GameEngine, Highlight, Square};

/// Invariant: a snapshot with a winner highlights exactly the winning line;
/// any other snapshot highlights its last move, or nothing before the first move.
pub struct HighlightConsistentInvariant;

impl HighlightConsistentInvariant {
    fn holds_for(state: &BoardState) -> bool {
        let detected = check_winner(state.board());
        match (state.winner(), state.highlight()) {
            (Some(mark), Highlight::WinningLine(line)) => {
                detected.map(|w| w.winner) == Some(mark)
                    && line.iter().all(|p| state.board().get(*p) == Square::Occupied(mark))
            }
            (None, Highlight::LastMove(pos)) => {
                detected.is_none()
                    && state.move_number().is_some()
                    && !state.board().is_empty(*pos)
            }
            (None, Highlight::None) => state.move_number().is_none() && detected.is_none(),
            _ => false,
        }
    }
}

impl Invariant<GameEngine> for HighlightConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        snapshots(engine).all(Self::holds_for)
    }

    fn description() -> &'static str {
        "Highlight shows the winning line or the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_for_win_and_last_move() {
        let mut engine = GameEngine::new();
        assert!(HighlightConsistentInvariant::holds(&engine));
        for cell in [2, 0, 4, 1, 6] {
            engine.apply_move(cell).unwrap();
            assert!(HighlightConsistentInvariant::holds(&engine));
        }
        assert_eq!(
            engine.state().highlight(),
            &Highlight::WinningLine([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_detects_highlight_on_empty_square() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        engine.current.highlight = Highlight::LastMove(Position::BottomRight);
        assert!(!HighlightConsistentInvariant::holds(&engine));
    }
}
