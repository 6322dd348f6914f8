//! Core domain types for tic-tac-toe.

use super::error::{BoardSizeError, MoveError};
use super::line::WinLine;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player one, marks with X and always moves first.
    One,
    /// Player two, marks with O.
    Two,
}

/// The player entitled to move next.
pub type Turn = Player;

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Symbol drawn for this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Occupant of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Side length of a square board.
///
/// Always at least 1, and small enough that `size * size` cells can be
/// allocated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The familiar 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Validates a side length.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size == 0 {
            return Err(BoardSizeError::Zero);
        }
        size.checked_mul(size)
            .filter(|&cells| cells <= isize::MAX as usize)
            .map(|_| Self(size))
            .ok_or(BoardSizeError::TooLarge { size })
    }

    /// Side length as a plain integer.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Square tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Marks in row-major order, `size * size` of them.
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size.cell_count()],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        let n = self.size.get();
        (row < n && column < n).then(|| row * n + column)
    }

    /// Gets the mark at a coordinate, or `None` off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Mark> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Sets the mark at a coordinate.
    pub(crate) fn set(&mut self, row: usize, column: usize, mark: Mark) -> Result<(), MoveError> {
        let index = self.index(row, column).ok_or(MoveError::OutOfBounds {
            row,
            column,
            size: self.size.get(),
        })?;
        self.cells[index] = mark;
        Ok(())
    }

    /// Checks if a coordinate is on the board and unclaimed.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        matches!(self.get(row, column), Some(Mark::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size.get())
    }

    /// Number of cells claimed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|mark| **mark == Mark::Occupied(player))
            .count()
    }

    /// Checks if every cell is claimed.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let n = self.size.get();
        let separator = vec!["-"; n].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|mark| mark.player().map_or('.', Player::symbol).to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{separator}\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with `winner` completing `line`.
    Won {
        /// Player who completed the line.
        winner: Player,
        /// First complete line in evaluation order.
        line: WinLine,
    },
    /// Every cell is claimed and no line is complete.
    Drawn,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(f, "{} wins ({})", winner, line),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
