//! Text rendering of game snapshots.

use crate::config::DisplayConfig;
use chess_core::{Color, Piece, Square};
use chess_engine::{GameMove, GameState, Status};

fn piece_char(piece: Piece, unicode: bool) -> char {
    if unicode {
        piece.glyph()
    } else {
        piece.to_fen_char()
    }
}

/// Bracket pair drawn around the piece on `sq`.
///
/// The selection wins over its destinations, which win over the checked
/// king, which wins over the last move's two squares.
fn markers(state: &GameState, sq: Square) -> (char, char) {
    if state.selected() == Some(sq) {
        return ('[', ']');
    }
    if state.candidates().contains(sq) {
        return if state.board().is_empty_at(sq) {
            ('(', ')')
        } else {
            ('<', '>')
        };
    }
    if state.is_check() && state.board().king_square(state.turn()) == Some(sq) {
        return ('!', '!');
    }
    match state.last_move() {
        Some(last) if last.from == sq || last.to == sq => ('{', '}'),
        _ => (' ', ' '),
    }
}

/// Draws the board. The selection is shown in `[ ]`, its quiet
/// destinations in `( )` and its captures in `< >`. A king in check is
/// flagged `! !` and the squares of the last move `{ }`.
pub fn render_board(state: &GameState, display: &DisplayConfig) -> String {
    let order: Vec<u8> = if display.flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &row in &order {
        if display.coordinates {
            out.push((b'8' - row) as char);
            out.push(' ');
        }
        for &col in &order {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            let center = state
                .board()
                .piece_at(sq)
                .map(|p| piece_char(p, display.unicode))
                .unwrap_or('.');
            let (left, right) = markers(state, sq);
            out.push(left);
            out.push(center);
            out.push(right);
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("  ");
        for &col in &order {
            out.push(' ');
            out.push((b'a' + col) as char);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One-line description of whose turn it is and how the game stands.
pub fn render_status(state: &GameState) -> String {
    match state.status() {
        Status::Ongoing => format!("{} to move", state.turn()),
        Status::Check => format!("{} to move, in check!", state.turn()),
        Status::Checkmate { winner } => format!("Checkmate! {} wins", winner),
        Status::Stalemate => "Stalemate: the game is drawn".to_string(),
    }
}

fn captured_line(state: &GameState, color: Color, unicode: bool) -> String {
    let kinds = state.captured(color);
    if kinds.is_empty() {
        return "-".to_string();
    }
    kinds
        .iter()
        .map(|&kind| piece_char(Piece::new(kind, color), unicode))
        .collect()
}

/// Pieces taken from each side, in capture order.
pub fn render_captured(state: &GameState, unicode: bool) -> String {
    format!(
        "Captured white: {}  black: {}",
        captured_line(state, Color::White, unicode),
        captured_line(state, Color::Black, unicode),
    )
}

/// Numbered move list, White's and Black's ply side by side.
pub fn render_history(history: &[GameMove]) -> String {
    if history.is_empty() {
        return "No moves yet".to_string();
    }
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let plies: Vec<String> = pair.iter().map(GameMove::annotated).collect();
            format!("{}. {}", i + 1, plies.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
