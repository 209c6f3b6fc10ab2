//! One game at the terminal: commands in, text out.

use crate::command::{Command, HELP};
use crate::config::DisplayConfig;
use crate::render::{render_board, render_captured, render_history, render_status};
use chess_engine::{all_legal_moves, ClickOutcome, Game};
use tracing::debug;

/// Result of handling one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Show(String),
    /// The players want to leave.
    Quit,
}

pub struct Session {
    game: Game,
    display: DisplayConfig,
    json: bool,
}

impl Session {
    pub fn new(display: DisplayConfig, json: bool) -> Self {
        Session {
            game: Game::new(),
            display,
            json,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board, status line and captures for the current snapshot.
    pub fn screen(&self) -> String {
        let state = self.game.state();
        let mut out = render_board(state, &self.display);
        out.push_str(&render_captured(state, self.display.unicode));
        out.push('\n');
        if let Some(last) = state.last_move() {
            out.push_str(&format!("Last move: {}\n", last.annotated()));
        }
        out.push_str(&render_status(state));
        if self.json {
            match serde_json::to_string(state) {
                Ok(json) => {
                    out.push('\n');
                    out.push_str(&json);
                }
                Err(e) => debug!(error = %e, "snapshot serialization failed"),
            }
        }
        out
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.handle(command),
            Err(e) => Reply::Show(format!("{} (type 'help' for commands)", e)),
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        debug!(?command, "command");
        match command {
            Command::Quit => Reply::Quit,
            Command::Help => Reply::Show(HELP.to_string()),
            Command::Redraw => Reply::Show(self.screen()),
            Command::History => Reply::Show(render_history(self.game.state().history())),
            Command::Moves => {
                let state = self.game.state();
                let moves: Vec<String> = all_legal_moves(state.board(), state.turn())
                    .iter()
                    .map(|m| m.notation())
                    .collect();
                if moves.is_empty() {
                    Reply::Show("No legal moves".to_string())
                } else {
                    Reply::Show(moves.join(" "))
                }
            }
            Command::Reset => {
                self.game.reset();
                Reply::Show(self.screen())
            }
            Command::Click(sq) => match self.game.click(sq) {
                ClickOutcome::Ignored if self.game.status().is_terminal() => {
                    Reply::Show("The game is over; type 'reset' to play again".to_string())
                }
                ClickOutcome::Ignored => Reply::Show(format!("Nothing to select on {}", sq)),
                _ => Reply::Show(self.screen()),
            },
            Command::Move(m) => {
                if let Err(e) = self.game.play(m).map(|_| ()) {
                    self.game.deselect();
                    return Reply::Show(format!("Illegal move {}: {}", m, e));
                }
                Reply::Show(self.screen())
            }
        }
    }
}
