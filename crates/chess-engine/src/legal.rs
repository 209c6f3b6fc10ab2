//! Legal move filtering.
//!
//! Each pseudo-legal candidate is played on a copy of the board and kept
//! only if the mover's king is not in check afterwards.

use crate::check::is_in_check;
use crate::movegen::{pseudo_moves, SquareList};
use chess_core::{Board, Color, Move, Square};

/// Returns the destinations the piece on `from` may legally move to.
pub fn legal_moves(board: &Board, from: Square) -> SquareList {
    let Some(piece) = board.piece_at(from) else {
        return SquareList::new();
    };

    let mut moves = pseudo_moves(board, from);
    moves.retain(|to| {
        let mut scratch = *board;
        scratch.relocate(from, to);
        !is_in_check(&scratch, piece.color)
    });
    moves
}

/// Returns true if any piece of `color` has at least one legal move.
pub fn has_any_legal_moves(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

/// Collects every legal move of `color`, origins in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from)
                .as_slice()
                .iter()
                .map(move |&to| Move::new(from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}
