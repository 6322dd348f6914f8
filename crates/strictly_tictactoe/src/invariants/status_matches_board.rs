//! Status invariant: the recorded status is what the rules say.

use super::super::{Game, rules};
use super::Invariant;

/// Invariant: the status equals a fresh evaluation of the board.
///
/// Covers three cases at once: a reported line really is complete and is
/// the first in evaluation order, a draw really is a full board without a
/// line, and a running game has neither.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Game> for StatusMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.current_status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Status agrees with the lines and free cells on the board"
    }
}
