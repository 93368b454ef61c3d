//! The game engine: single owner of the current snapshot and the history.

use crate::invariants::{assert_invariants, InvariantSet, ReplayInvariants};
use crate::rules::check_winner;
use crate::{BoardState, EngineError, History, MoveOutcome, Position, Square};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe state machine with replayable history.
///
/// Every mutation goes through [`apply_move`](Self::apply_move),
/// [`select_history`](Self::select_history) or [`new_game`](Self::new_game).
/// Views borrow the state read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) current: BoardState,
    pub(crate) history: History,
}

impl GameEngine {
    /// Creates an engine showing a fresh board with no history.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot being displayed and played from.
    pub fn state(&self) -> &BoardState {
        &self.current
    }

    /// Every recorded snapshot of the current game.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when the current snapshot is the newest recorded one.
    pub fn is_at_latest(&self) -> bool {
        match self.current.move_number() {
            None => self.history.is_empty(),
            Some(n) => n + 1 == self.history.len(),
        }
    }

    /// Handles a click on cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] for indices above 8.
    #[instrument(skip(self), fields(move_number = ?self.current.move_number()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, EngineError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Rejecting click outside the board");
            return Err(EngineError::CellOutOfRange { index });
        };
        Ok(self.apply_position(position))
    }

    /// Handles a click on `position`.
    #[instrument(skip(self), fields(move_number = ?self.current.move_number()))]
    pub fn apply_position(&mut self, position: Position) -> MoveOutcome {
        let outcome = if self.current.is_ended() {
            self.restart(position)
        } else if !self.current.board().is_empty(position) {
            debug!(%position, "Square occupied, ignoring click");
            MoveOutcome::Ignored { position }
        } else {
            self.place(position)
        };

        assert_invariants(self);
        outcome
    }

    /// Makes the snapshot at `index` current. The history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HistoryOutOfRange`] if no snapshot exists at `index`.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, index: usize) -> Result<&BoardState, EngineError> {
        let Some(snapshot) = self.history.get(index) else {
            warn!(index, len = self.history.len(), "Rejecting history selection");
            return Err(EngineError::HistoryOutOfRange {
                index,
                len: self.history.len(),
            });
        };
        self.current = *snapshot;
        debug!(index, status = %self.current.status(), "Jumped to snapshot");
        Ok(&self.current)
    }

    /// Discards everything and shows a fresh board.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Resetting to a fresh board");
        self.current = BoardState::fresh();
        self.history.clear();
    }

    fn restart(&mut self, position: Position) -> MoveOutcome {
        let opening = BoardState::opening(position);
        self.history.restart_with(opening);
        self.current = opening;
        info!(%position, "Game over; started a new game");
        MoveOutcome::Started { position }
    }

    fn place(&mut self, position: Position) -> MoveOutcome {
        let mark = self.current.to_move();
        let mut board = *self.current.board();
        board.set(position, Square::Occupied(mark));

        let win = check_winner(&board);
        let next = self.current.successor(position, win, board);

        self.history.truncate_after(self.current.move_number());
        self.history.push(next);
        self.current = next;

        match win {
            Some(w) => {
                info!(winner = %w.winner, line = ?w.line, "Line completed");
                MoveOutcome::Won {
                    mark: w.winner,
                    line: w.line,
                }
            }
            None if board.is_full() => {
                info!(%mark, %position, "Board full, draw");
                MoveOutcome::Drawn { mark, position }
            }
            None => {
                debug!(%mark, %position, move_number = ?next.move_number(), "Mark placed");
                MoveOutcome::Placed { mark, position }
            }
        }
    }

    /// Checks every engine invariant, returning descriptions of those violated.
    pub fn check_invariants(&self) -> Result<(), Vec<String>> {
        ReplayInvariants::check_all(self)
            .map_err(|violations| violations.into_iter().map(|v| v.description).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Mark};

    fn play(engine: &mut GameEngine, cells: &[usize]) {
        for &cell in cells {
            engine.apply_move(cell).expect("cell in range");
        }
    }

    #[test]
    fn test_first_click_places_x_at_move_zero() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_move(4).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                mark: Mark::X,
                position: Position::Center
            }
        );
        assert_eq!(engine.state().move_number(), Some(0));
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.state().turn_is_a());
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 4]);
        let before = engine.clone();
        let outcome = engine.apply_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored { position: Position::Center });
        assert!(!outcome.changed_state());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0]);
        let before = engine.clone();
        assert_eq!(engine.apply_move(9), Err(EngineError::CellOutOfRange { index: 9 }));
        assert_eq!(
            engine.select_history(1).map(|s| *s),
            Err(EngineError::HistoryOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_is_at_latest_tracks_navigation() {
        let mut engine = GameEngine::new();
        assert!(engine.is_at_latest());
        play(&mut engine, &[0, 1, 2]);
        assert!(engine.is_at_latest());
        engine.select_history(0).unwrap();
        assert!(!engine.is_at_latest());
        engine.select_history(2).unwrap();
        assert!(engine.is_at_latest());
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 1, 2]);
        engine.new_game();
        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.state().status(), GameStatus::Fresh);
    }

    #[test]
    fn test_invariants_hold_through_a_game() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            engine.apply_move(cell).unwrap();
            assert_eq!(engine.check_invariants(), Ok(()));
        }
        assert_eq!(engine.state().status(), GameStatus::Draw);
    }
}
