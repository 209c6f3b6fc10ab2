//! Parsing of the lines typed at the prompt.

use chess_core::{Move, Square};
use thiserror::Error;

/// Errors for input that is not a recognized command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("invalid square '{0}': use a1-h8 or row,col with 0-7")]
    InvalidSquare(String),
}

/// A command entered by one of the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a square (select, move, or deselect).
    Click(Square),
    /// Select and move in one go, e.g. `e2e4`.
    Move(Move),
    /// List every legal move for the side to move.
    Moves,
    /// Show the move history.
    History,
    /// Start a new game.
    Reset,
    Help,
    Quit,
    /// Blank line: redraw.
    Redraw,
}

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Redraw),
            "moves" | "m" => Ok(Command::Moves),
            "history" | "h" => Ok(Command::History),
            "reset" | "new" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Self::parse_squares(other),
        }
    }

    fn parse_squares(input: &str) -> Result<Self, CommandError> {
        if let Some((row, col)) = input.split_once(',') {
            let square = row
                .trim()
                .parse::<u8>()
                .ok()
                .zip(col.trim().parse::<u8>().ok())
                .and_then(|(r, c)| Square::new(r, c))
                .ok_or_else(|| CommandError::InvalidSquare(input.to_string()))?;
            return Ok(Command::Click(square));
        }

        match input.len() {
            2 => Square::from_algebraic(input)
                .map(Command::Click)
                .ok_or_else(|| CommandError::InvalidSquare(input.to_string())),
            4 => Move::from_notation(input)
                .map(Command::Move)
                .ok_or_else(|| CommandError::Unknown(input.to_string())),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }
}

/// Text shown for `help`.
pub const HELP: &str = "\
Commands:
  e2 / 6,4   click a square: select a piece, move it, or deselect
  e2e4       move in one step
  moves      list legal moves for the side to move
  history    show all moves played
  reset      start a new game
  quit       leave

Board: [x] selected  (.) move  <x> capture  !k! king in check  {x} last move";
