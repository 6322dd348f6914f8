//! Game engine for tic-tac-toe.

use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::types::{Board, BoardSize, GameStatus, Mark, Player, Turn};
use super::error::MoveError;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Holds exactly one game. [`Game::submit_move`] and [`Game::new_game`] are
/// the only mutators; every other method is a read-only query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Turn,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game on an empty board. Player one moves first.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            turn: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Discards the current game and starts a fresh one of `size`.
    #[instrument(skip(self), fields(previous_size = %self.board.size()))]
    pub fn new_game(&mut self, size: BoardSize) {
        *self = Self::new(size);
        info!("New game started");
    }

    /// Checks whether the current player may claim `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns, in this order of precedence:
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    pub fn check_move(&self, row: usize, column: usize) -> Result<(), MoveError> {
        let size = self.board.size().get();
        if row >= size || column >= size {
            return Err(MoveError::OutOfBounds { row, column, size });
        }
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.is_empty(row, column) {
            return Err(MoveError::CellOccupied { row, column });
        }
        Ok(())
    }

    /// Places the current player's mark at `(row, column)`.
    ///
    /// On a win the turn stays with the winner; otherwise it passes to the
    /// opponent unless the move filled the board. Returns the resulting
    /// status.
    ///
    /// # Errors
    ///
    /// See [`Game::check_move`]. A rejected move changes nothing.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<GameStatus, MoveError> {
        if let Err(error) = self.check_move(row, column) {
            warn!(%error, "Move rejected");
            return Err(error);
        }

        let mover = self.turn;
        self.board.set(row, column, Mark::Occupied(mover))?;
        debug!("Mark placed");

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::InProgress => self.turn = mover.opponent(),
            GameStatus::Won { winner, line } => info!(%winner, %line, "Game won"),
            GameStatus::Drawn => info!("Game drawn"),
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );
        Ok(self.status)
    }

    /// Returns the mark at a coordinate, or `None` off the board.
    pub fn mark_at(&self, row: usize, column: usize) -> Option<Mark> {
        self.board.get(row, column)
    }

    /// Returns the player to move next.
    ///
    /// After a win this is still the winner, since the turn does not pass.
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    /// Returns the game status.
    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unclaimed coordinates in row-major order.
    ///
    /// Empty once the game is over, even if cells remain free.
    pub fn available_moves(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.board.size().get();
        let open = !self.status.is_terminal();
        (0..n)
            .flat_map(move |row| (0..n).map(move |column| (row, column)))
            .filter(move |&(row, column)| open && self.board.is_empty(row, column))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}
