//! Application state and the line-oriented input loop.

use crate::config::GameConfig;
use crate::render;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_tictactoe::{BoardSize, Game};
use tracing::{debug, info, instrument};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell.
    Move {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },
    /// Start over, optionally with a different board size.
    NewGame(Option<BoardSize>),
    /// Show the command reference.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{input}': {reason}")]
pub struct InputError {
    /// The offending line.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl InputError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl Command {
    /// Parses one line of input.
    ///
    /// Moves are two integers separated by whitespace or a comma.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let trimmed = line.trim();
        let mut words = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty());

        match words.next().map(str::to_lowercase).as_deref() {
            None => Err(InputError::new(line, "empty line")),
            Some("q" | "quit" | "exit") => Ok(Command::Quit),
            Some("h" | "help" | "?") => Ok(Command::Help),
            Some("n" | "new") => match words.next() {
                None => Ok(Command::NewGame(None)),
                Some(size) => crate::cli::parse_size(size)
                    .map(|size| Command::NewGame(Some(size)))
                    .map_err(|reason| InputError::new(line, reason)),
            },
            Some(first) => {
                let row = first
                    .parse()
                    .map_err(|_| InputError::new(line, "expected '<row> <column>'"))?;
                let column = words
                    .next()
                    .and_then(|word| word.parse().ok())
                    .ok_or_else(|| InputError::new(line, "expected '<row> <column>'"))?;
                if words.next().is_some() {
                    return Err(InputError::new(line, "too many values"));
                }
                Ok(Command::Move { row, column })
            }
        }
    }
}

/// What the loop should do after handling a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and the board, then read again.
    Continue(String),
    /// Stop reading input.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    config: GameConfig,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(*config.size()),
            config,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handles one line of input.
    ///
    /// Once a game is over, any input other than `quit` or `help` starts a
    /// new game instead of being treated as a move.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if self.game.current_status().is_terminal() {
            return match Command::parse(line) {
                Ok(Command::Quit) => Reply::Quit,
                Ok(Command::Help) => Reply::Continue(render::help_text().to_string()),
                Ok(Command::NewGame(Some(size))) => self.restart(size),
                _ => self.restart(self.game.size()),
            };
        }

        match Command::parse(line) {
            Ok(command) => self.handle_command(command),
            Err(error) => {
                debug!(%error, "Input rejected");
                Reply::Continue(error.to_string())
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Quit => Reply::Quit,
            Command::Help => Reply::Continue(render::help_text().to_string()),
            Command::NewGame(size) => self.restart(size.unwrap_or(*self.config.size())),
            Command::Move { row, column } => match self.game.submit_move(row, column) {
                Ok(_) => Reply::Continue(render::status_line(&self.game, &self.config)),
                Err(error) => Reply::Continue(format!(
                    "{}. {}",
                    error,
                    render::status_line(&self.game, &self.config)
                )),
            },
        }
    }

    fn restart(&mut self, size: BoardSize) -> Reply {
        info!(%size, "Restarting game");
        self.game.new_game(size);
        Reply::Continue(format!(
            "New {size}x{size} game. {}",
            render::status_line(&self.game, &self.config)
        ))
    }
}

/// Runs the game loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(mut app: App, input: R, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "{}\n", render::help_text())?;
    writeln!(output, "{}", render::render_board(app.game()))?;
    writeln!(output, "{}", render::status_line(app.game(), app.config()))?;

    for line in input.lines() {
        let line = line?;
        match app.handle_line(&line) {
            Reply::Quit => break,
            Reply::Continue(message) => {
                writeln!(output, "\n{}", render::render_board(app.game()))?;
                writeln!(output, "{}", message)?;
            }
        }
        output.flush()?;
    }

    info!("Game loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameStatus, Mark, Player, WinLine};

    #[test]
    fn test_parse_move() {
        assert_eq!(
            Command::parse(" 1 2 "),
            Ok(Command::Move { row: 1, column: 2 })
        );
        assert_eq!(
            Command::parse("2,0"),
            Ok(Command::Move { row: 2, column: 0 })
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("QUIT"), Ok(Command::Quit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("new"), Ok(Command::NewGame(None)));
        assert_eq!(
            Command::parse("new 4"),
            Ok(Command::NewGame(Some(BoardSize::new(4).unwrap())))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("1").is_err());
        assert!(Command::parse("1 2 3").is_err());
        assert!(Command::parse("a b").is_err());
        assert!(Command::parse("new 0").is_err());
    }

    #[test]
    fn test_moves_reach_the_engine() {
        let mut app = App::new(GameConfig::default());
        assert_eq!(
            app.handle_line("1 1"),
            Reply::Continue("Player 2 (O) to move".to_string())
        );
        assert_eq!(app.game().mark_at(1, 1), Some(Mark::Occupied(Player::One)));
    }

    #[test]
    fn test_engine_errors_are_reported() {
        let mut app = App::new(GameConfig::default());
        app.handle_line("0 0");
        let Reply::Continue(message) = app.handle_line("0 0") else {
            panic!("Expected to continue");
        };
        assert!(message.starts_with("Cell (0, 0) is already occupied"));
        assert_eq!(app.game().current_turn(), Player::Two);
    }

    #[test]
    fn test_input_after_win_starts_new_game() {
        let mut app = App::new(GameConfig::default());
        for line in ["0 0", "1 0", "0 1", "1 1", "0 2"] {
            app.handle_line(line);
        }
        assert_eq!(
            app.game().current_status(),
            GameStatus::Won {
                winner: Player::One,
                line: WinLine::Row(0)
            }
        );

        app.handle_line("2 2");
        assert_eq!(app.game().current_status(), GameStatus::InProgress);
        assert_eq!(app.game().mark_at(2, 2), Some(Mark::Empty));
    }

    #[test]
    fn test_new_game_with_size() {
        let mut app = App::new(GameConfig::default());
        app.handle_line("new 5");
        assert_eq!(app.game().size().get(), 5);
    }

    #[test]
    fn test_run_loop() {
        let app = App::new(GameConfig::default());
        let input = b"0 0\n9 9\nquit\n0 1\n";
        let mut output = Vec::new();

        run(app, &input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Player 2 (O) to move"));
        assert!(text.contains("Cell (9, 9) is outside the 3x3 board"));
        assert!(!text.contains("Cell (0, 1)"));
    }
}
