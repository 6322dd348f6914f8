//! Scenario tests for the game engine.

use strictly_tictactoe::{BoardSize, Game, GameStatus, LineKind, Mark, MoveError, Player, WinLine};

fn play(game: &mut Game, moves: &[(usize, usize)]) -> Vec<GameStatus> {
    moves
        .iter()
        .map(|&(row, column)| game.submit_move(row, column).expect("Valid move"))
        .collect()
}

#[test]
fn test_row_win() {
    let mut game = Game::new(BoardSize::CLASSIC);
    // X(0,0) O(1,0) X(0,1) O(1,1) X(0,2)
    let statuses = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(statuses[..4].iter().all(|s| *s == GameStatus::InProgress));
    assert_eq!(
        statuses[4],
        GameStatus::Won {
            winner: Player::One,
            line: WinLine::Row(0)
        }
    );
    assert_eq!(game.current_status(), statuses[4]);
}

#[test]
fn test_main_diagonal_win() {
    let mut game = Game::new(BoardSize::CLASSIC);
    // X(0,0) O(0,1) X(1,1) O(0,2) X(2,2)
    let statuses = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    let last = statuses[statuses.len() - 1];
    assert_eq!(
        last,
        GameStatus::Won {
            winner: Player::One,
            line: WinLine::DiagonalMain
        }
    );
    let line = last.line().expect("Won status has a line");
    assert_eq!(line.kind(), LineKind::DiagonalMain);
    assert_eq!(line.index(), None);
}

#[test]
fn test_full_board_draw() {
    let mut game = Game::new(BoardSize::CLASSIC);
    // Final board: X O X / X O O / O X X
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let statuses = play(&mut game, &moves);

    assert!(statuses[..8].iter().all(|s| *s == GameStatus::InProgress));
    assert_eq!(statuses[8], GameStatus::Drawn);
    assert_eq!(game.board().display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
}

#[test]
fn test_row_beats_diagonal_on_simultaneous_completion() {
    let mut game = Game::new(BoardSize::CLASSIC);
    // X's last move at (0,0) completes row 0 and the main diagonal.
    let statuses = play(
        &mut game,
        &[
            (0, 1),
            (1, 0),
            (0, 2),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 2),
            (2, 1),
            (0, 0),
        ],
    );

    assert_eq!(
        statuses[8],
        GameStatus::Won {
            winner: Player::One,
            line: WinLine::Row(0)
        }
    );
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    let mut game = Game::new(BoardSize::CLASSIC);
    // Final board: X O X / O X O / O X X, X wins the main diagonal on the ninth move.
    let statuses = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(
        statuses[8],
        GameStatus::Won {
            winner: Player::One,
            line: WinLine::DiagonalMain
        }
    );
    assert!(game.board().is_full());
}

#[test]
fn test_four_by_four_column_win() {
    let mut game = Game::new(BoardSize::new(4).unwrap());
    let statuses = play(
        &mut game,
        &[(0, 3), (0, 0), (1, 3), (1, 0), (2, 3), (2, 0), (3, 1), (3, 0)],
    );

    assert_eq!(
        statuses[7],
        GameStatus::Won {
            winner: Player::Two,
            line: WinLine::Column(0)
        }
    );
}

#[test]
fn test_single_cell_board_first_move_wins() {
    let mut game = Game::new(BoardSize::new(1).unwrap());
    assert_eq!(
        game.submit_move(0, 0),
        Ok(GameStatus::Won {
            winner: Player::One,
            line: WinLine::Row(0)
        })
    );
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = Game::new(BoardSize::CLASSIC);
    game.submit_move(1, 1).unwrap();
    let before = game.clone();

    assert_eq!(
        game.submit_move(1, 1),
        Err(MoveError::CellOccupied { row: 1, column: 1 })
    );
    assert_eq!(game, before);
    assert_eq!(game.current_turn(), Player::Two);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new(BoardSize::CLASSIC);
    let before = game.clone();

    let error = game.submit_move(0, 3).unwrap_err();
    assert_eq!(
        error,
        MoveError::OutOfBounds {
            row: 0,
            column: 3,
            size: 3
        }
    );
    assert_eq!(error.to_string(), "Cell (0, 3) is outside the 3x3 board");
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = Game::new(BoardSize::CLASSIC);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.clone();

    assert_eq!(game.submit_move(2, 2), Err(MoveError::GameAlreadyOver));
    assert_eq!(game, before);
    assert_eq!(game.mark_at(2, 2), Some(Mark::Empty));
}

#[test]
fn test_new_game_after_win_resets() {
    let mut game = Game::new(BoardSize::CLASSIC);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.new_game(BoardSize::new(4).unwrap());

    assert_eq!(game.size().get(), 4);
    assert_eq!(game.current_turn(), Player::One);
    assert_eq!(game.current_status(), GameStatus::InProgress);
    assert!(game.board().cells().iter().all(|mark| mark.is_empty()));
    assert!(game.submit_move(3, 3).is_ok());
}

#[test]
fn test_queries_do_not_mutate() {
    let mut game = Game::new(BoardSize::CLASSIC);
    game.submit_move(0, 0).unwrap();
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(game.mark_at(0, 0), Some(Mark::Occupied(Player::One)));
        assert_eq!(game.mark_at(7, 7), None);
        assert_eq!(game.current_status(), GameStatus::InProgress);
        assert_eq!(game.current_turn(), Player::Two);
    }
    assert_eq!(game, before);
}
