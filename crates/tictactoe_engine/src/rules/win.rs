//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
///
/// When more than one line is complete the earliest entry wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Mark occupying all three squares.
    pub winner: Mark,
    /// The three squares, in enumeration order.
    pub line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] whose three squares hold the same mark.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        let winner = sq.mark()?;
        (sq == board.get(b) && sq == board.get(c)).then_some(WinningLine {
            winner,
            line: [a, b, c],
        })
    })
}
