//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::find_win_line;
use tracing::instrument;

/// Checks if the board is full (all cells claimed).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|mark| *mark != Mark::Empty)
}

/// A full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_win_line(board).is_none()
}
