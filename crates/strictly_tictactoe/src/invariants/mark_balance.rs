//! Mark balance invariant: players alternate, so counts never drift.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: player one has the same number of marks as player two, or
/// exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let ones = game.board().count(Player::One);
        let twos = game.board().count(Player::Two);
        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Player one holds as many marks as player two, or one more"
    }
}
