//! Formal verification of invariants using the Kani model checker.
//!
//! These harnesses explore every move sequence on small boards (bounded)
//! and check that the engine never leaves an invariant-violating state.

use crate::{BoardSize, Game, GameInvariants, InvariantSet};

/// Every accepted or rejected move on a 2x2 board preserves all invariants.
#[kani::proof]
#[kani::unwind(8)]
fn verify_invariants_hold_on_two_by_two() {
    let Ok(size) = BoardSize::new(2) else {
        return;
    };
    let mut game = Game::new(size);

    for _ in 0..4 {
        let row: usize = kani::any();
        let column: usize = kani::any();
        kani::assume(row < 3 && column < 3);

        let before = game.clone();
        if game.submit_move(row, column).is_err() {
            assert!(game == before, "Rejected move mutated the game");
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

/// A single-cell board is won by the first move.
#[kani::proof]
#[kani::unwind(4)]
fn verify_single_cell_board_ends_immediately() {
    let Ok(size) = BoardSize::new(1) else {
        return;
    };
    let mut game = Game::new(size);
    assert!(game.submit_move(0, 0).is_ok());
    assert!(game.current_status().is_terminal());
    assert!(game.submit_move(0, 0).is_err());
}
