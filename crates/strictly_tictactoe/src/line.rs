//! Lines that can win a game, and the cells they cover.
//!
//! A renderer receives a [`WinLine`] and works out its own geometry from
//! [`WinLine::cells`] or [`WinLine::endpoints`].

use super::types::BoardSize;
use serde::{Deserialize, Serialize};

/// Shape of a line without its position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum LineKind {
    /// Horizontal line.
    Row,
    /// Vertical line.
    Column,
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
}

/// A full row, column, or diagonal of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum WinLine {
    /// Row with the given index, counted from the top.
    #[display("row {_0}")]
    Row(usize),
    /// Column with the given index, counted from the left.
    #[display("column {_0}")]
    Column(usize),
    /// Cells `(i, i)`.
    #[display("main diagonal")]
    DiagonalMain,
    /// Cells `(i, size - 1 - i)`.
    #[display("anti-diagonal")]
    DiagonalAnti,
}

impl WinLine {
    /// Every line of a board, in evaluation order.
    ///
    /// Rows top to bottom, then columns left to right, then the main
    /// diagonal, then the anti-diagonal. Win detection reports the first
    /// complete line in this order.
    pub fn candidates(size: BoardSize) -> impl Iterator<Item = WinLine> {
        let n = size.get();
        (0..n)
            .map(WinLine::Row)
            .chain((0..n).map(WinLine::Column))
            .chain([WinLine::DiagonalMain, WinLine::DiagonalAnti])
    }

    /// Shape of the line.
    pub fn kind(self) -> LineKind {
        match self {
            WinLine::Row(_) => LineKind::Row,
            WinLine::Column(_) => LineKind::Column,
            WinLine::DiagonalMain => LineKind::DiagonalMain,
            WinLine::DiagonalAnti => LineKind::DiagonalAnti,
        }
    }

    /// Row or column number; diagonals have none.
    pub fn index(self) -> Option<usize> {
        match self {
            WinLine::Row(index) | WinLine::Column(index) => Some(index),
            WinLine::DiagonalMain | WinLine::DiagonalAnti => None,
        }
    }

    /// The `step`-th cell of the line on an `n`-wide board.
    fn cell(self, step: usize, n: usize) -> (usize, usize) {
        match self {
            WinLine::Row(row) => (row, step),
            WinLine::Column(column) => (step, column),
            WinLine::DiagonalMain => (step, step),
            WinLine::DiagonalAnti => (step, n - 1 - step),
        }
    }

    /// Coordinates `(row, column)` of each cell on the line, in order.
    ///
    /// Rows run left to right, columns and both diagonals top to bottom.
    pub fn cells(self, size: BoardSize) -> impl Iterator<Item = (usize, usize)> {
        let n = size.get();
        (0..n).map(move |step| self.cell(step, n))
    }

    /// First and last cell of the line, for drawing an overlay stroke.
    pub fn endpoints(self, size: BoardSize) -> ((usize, usize), (usize, usize)) {
        let n = size.get();
        (self.cell(0, n), self.cell(n - 1, n))
    }

    /// Checks if the line passes through a coordinate.
    pub fn contains(self, size: BoardSize, row: usize, column: usize) -> bool {
        self.cells(size).any(|cell| cell == (row, column))
    }
}
