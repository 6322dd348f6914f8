//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so invariants and the engine
//! share one definition of "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{find_win_line, line_owner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the status a board is in.
///
/// A complete line wins even on a full board; the draw check only applies
/// when no line is complete.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = find_win_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
