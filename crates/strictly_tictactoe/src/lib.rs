//! Pure tic-tac-toe game logic for square boards of any size.
//!
//! The engine owns one game: the cells, whose turn it is, and whether the
//! game is still running. Callers drive it with two mutators,
//! [`Game::submit_move`] and [`Game::new_game`], and render from the read-only
//! queries. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BoardSize, Game, GameStatus, Player, WinLine};
//!
//! let mut game = Game::new(BoardSize::CLASSIC);
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.submit_move(row, column)?;
//! }
//! let status = game.submit_move(0, 2)?;
//! assert_eq!(
//!     status,
//!     GameStatus::Won { winner: Player::One, line: WinLine::Row(0) }
//! );
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod line;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{BoardSizeError, MoveError};
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    StatusMatchesBoardInvariant, TurnMatchesBoardInvariant,
};
pub use line::{LineKind, WinLine};
pub use types::{Board, BoardSize, GameStatus, Mark, Player, Turn};
