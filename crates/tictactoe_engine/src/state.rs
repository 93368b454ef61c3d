//! Board snapshots.
//!
//! A [`BoardState`] is one immutable frame of a game: the marks, which cells
//! to emphasize, who moves next, the winner and the frame's index within the
//! history. The engine produces a new snapshot per applied move.

use crate::rules::WinningLine;
use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// Cells to visually emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// Nothing to emphasize (fresh game).
    #[default]
    None,
    /// The square just played.
    LastMove(Position),
    /// The three squares of a completed line.
    WinningLine([Position; 3]),
}

impl Highlight {
    /// Highlighted squares: zero, one or three of them.
    pub fn positions(&self) -> &[Position] {
        match self {
            Highlight::None => &[],
            Highlight::LastMove(pos) => std::slice::from_ref(pos),
            Highlight::WinningLine(line) => line,
        }
    }

    /// Whether `pos` is highlighted.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Phase of a game as seen from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No move has been made yet.
    #[display("Fresh")]
    Fresh,
    /// Game is ongoing.
    #[display("InProgress")]
    InProgress,
    /// Game ended in a win.
    #[display("Won({})", _0)]
    Won(Mark),
    /// Board filled without a winner.
    #[display("Draw")]
    Draw,
}

/// One frame of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub(crate) board: Board,
    pub(crate) highlight: Highlight,
    pub(crate) to_move: Mark,
    pub(crate) winner: Option<Mark>,
    pub(crate) move_number: Option<usize>,
}

impl BoardState {
    /// The fresh state shown before the first click.
    pub fn fresh() -> Self {
        Self {
            board: Board::new(),
            highlight: Highlight::None,
            to_move: Mark::X,
            winner: None,
            move_number: None,
        }
    }

    /// First frame of a new game: X at `pos`, O to move.
    pub(crate) fn opening(pos: Position) -> Self {
        let mut board = Board::new();
        board.set(pos, Square::Occupied(Mark::X));
        Self {
            board,
            highlight: Highlight::LastMove(pos),
            to_move: Mark::O,
            winner: None,
            move_number: Some(0),
        }
    }

    /// Frame following `self` once the player to move takes `pos`.
    ///
    /// The caller guarantees `pos` is empty and the game has not ended.
    pub(crate) fn successor(&self, pos: Position, win: Option<WinningLine>, board: Board) -> Self {
        Self {
            board,
            highlight: match win {
                Some(w) => Highlight::WinningLine(w.line),
                None => Highlight::LastMove(pos),
            },
            to_move: self.to_move.opponent(),
            winner: win.map(|w| w.winner),
            move_number: Some(self.next_move_number()),
        }
    }

    /// Index the next snapshot will occupy in the history.
    pub(crate) fn next_move_number(&self) -> usize {
        self.move_number.map_or(0, |n| n + 1)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the highlighted squares.
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Mark that plays next. Not consulted once a winner exists.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// True when mark A (X) plays next.
    pub fn turn_is_a(&self) -> bool {
        self.to_move == Mark::X
    }

    /// Returns the winner, if a line has been completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Index of this snapshot in the history; `None` before the first move.
    pub fn move_number(&self) -> Option<usize> {
        self.move_number
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Draw,
            None if self.move_number.is_none() => GameStatus::Fresh,
            None => GameStatus::InProgress,
        }
    }

    /// Won or drawn.
    pub fn is_ended(&self) -> bool {
        matches!(self.status(), GameStatus::Won(_) | GameStatus::Draw)
    }

    /// Human-readable status line.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::Fresh | GameStatus::InProgress => format!("Next turn: {}", self.to_move),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = BoardState::fresh();
        assert_eq!(state.status(), GameStatus::Fresh);
        assert!(state.turn_is_a());
        assert!(!state.is_ended());
        assert_eq!(state.move_number(), None);
        assert!(state.highlight().positions().is_empty());
        assert_eq!(state.status_line(), "Next turn: X");
    }

    #[test]
    fn test_opening_state() {
        let state = BoardState::opening(Position::Center);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.board().marks_of(Mark::X), 1);
        assert!(!state.turn_is_a());
        assert_eq!(state.move_number(), Some(0));
        assert_eq!(state.highlight(), &Highlight::LastMove(Position::Center));
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_highlight_sizes() {
        assert_eq!(Highlight::None.positions().len(), 0);
        assert_eq!(Highlight::LastMove(Position::TopLeft).positions().len(), 1);
        let line = Highlight::WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]);
        assert_eq!(line.positions().len(), 3);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
