//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and document what the engine
//! guarantees about its state.

#[cfg(kani)]
mod verification;

pub mod mark_balance;
pub mod status_matches_board;
pub mod turn_matches_board;

pub use mark_balance::MarkBalanceInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($name::holds(state), $name::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All engine invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnMatchesBoardInvariant,
    StatusMatchesBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Game, GameStatus, Mark, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new(BoardSize::new(4).unwrap());
        for (row, column) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            game.submit_move(row, column).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut game = Game::default();
        game.board.set(0, 0, Mark::Occupied(Player::Two)).unwrap();
        game.board.set(0, 1, Mark::Occupied(Player::Two)).unwrap();
        game.board.set(0, 2, Mark::Occupied(Player::Two)).unwrap();

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations[0].description,
            MarkBalanceInvariant::description()
        );
    }

    #[test]
    fn test_smaller_set() {
        let mut game = Game::default();
        game.status = GameStatus::Drawn;

        type BoardOnly = (MarkBalanceInvariant, TurnMatchesBoardInvariant);
        assert!(BoardOnly::check_all(&game).is_err());
        assert!(<(MarkBalanceInvariant,)>::check_all(&game).is_ok());
    }
}
