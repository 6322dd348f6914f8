//! Turn invariant: the turn follows from the marks on the board.

use super::super::{Game, GameStatus, Player};
use super::Invariant;

/// Invariant: the recorded turn agrees with the board.
///
/// While in progress, player one is to move exactly when both players hold
/// the same number of marks. Once the game is over the turn stays with
/// whoever made the last move, and a winner is always that player.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Game> for TurnMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let ones = game.board().count(Player::One);
        let twos = game.board().count(Player::Two);
        let turn = game.current_turn();

        match game.current_status() {
            GameStatus::InProgress => (turn == Player::One) == (ones == twos),
            GameStatus::Won { winner, .. } => {
                let last_mover = if ones > twos { Player::One } else { Player::Two };
                ones + twos > 0 && winner == last_mover && turn == last_mover
            }
            GameStatus::Drawn => {
                let last_mover = if ones > twos { Player::One } else { Player::Two };
                turn == last_mover
            }
        }
    }

    fn description() -> &'static str {
        "Turn passes after every non-terminal move and stays with the last mover"
    }
}
