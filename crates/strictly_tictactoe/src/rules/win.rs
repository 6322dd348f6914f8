//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player, WinLine};
use tracing::instrument;

/// Returns the player holding every cell of `line`, if any.
///
/// A line with any empty cell, or with both players' marks, has no owner.
pub fn line_owner(board: &Board, line: WinLine) -> Option<Player> {
    let mut marks = line
        .cells(board.size())
        .map(|(row, column)| board.get(row, column));
    let Some(Some(Mark::Occupied(player))) = marks.next() else {
        return None;
    };
    marks
        .all(|mark| mark == Some(Mark::Occupied(player)))
        .then_some(player)
}

/// Finds the first complete line on the board.
///
/// Lines are checked in [`WinLine::candidates`] order, so when one move
/// completes several lines the lowest row wins, then the lowest column,
/// then the main diagonal.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn find_win_line(board: &Board) -> Option<(Player, WinLine)> {
    WinLine::candidates(board.size())
        .find_map(|line| line_owner(board, line).map(|player| (player, line)))
}
