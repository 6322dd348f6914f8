//! Text rendering of the game for the terminal.
//!
//! Pure functions from engine state to strings, so they can be tested
//! without a terminal.

use crate::config::GameConfig;
use strictly_tictactoe::{Game, GameStatus, Mark, Player};

/// Renders the board with row and column numbers.
///
/// Cells on the winning line are bracketed, e.g. `[X]`.
pub fn render_board(game: &Game) -> String {
    let size = game.size();
    let n = size.get();
    let line = game.current_status().line();
    let width = (n - 1).to_string().len();

    let mut out = format!("{:width$} ", "");
    for column in 0..n {
        out.push_str(&format!(" {:^width$} ", column));
    }
    out.push('\n');

    for (row, marks) in game.board().rows().enumerate() {
        out.push_str(&format!("{:>width$} ", row));
        for (column, mark) in marks.iter().enumerate() {
            let symbol = symbol(*mark);
            let cell = if line.is_some_and(|l| l.contains(size, row, column)) {
                format!("[{:^width$}]", symbol)
            } else {
                format!(" {:^width$} ", symbol)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn symbol(mark: Mark) -> char {
    mark.player().map_or('.', Player::symbol)
}

/// One-line summary of the game for the status bar.
pub fn status_line(game: &Game, config: &GameConfig) -> String {
    match game.current_status() {
        GameStatus::InProgress => {
            let turn = game.current_turn();
            format!("{} ({}) to move", config.name_of(turn), turn.symbol())
        }
        GameStatus::Won { winner, line } => format!(
            "{} ({}) wins with {}! Enter anything to play again.",
            config.name_of(winner),
            winner.symbol(),
            line
        ),
        GameStatus::Drawn => "It's a draw! Enter anything to play again.".to_string(),
    }
}

/// Command reference shown on start and on `help`.
pub fn help_text() -> &'static str {
    "Commands:\n  <row> <column>  place your mark\n  new [size]      start a new game\n  help            show this text\n  quit            leave"
}
