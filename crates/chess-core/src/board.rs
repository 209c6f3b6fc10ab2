//! The 8x8 board.

use crate::{Color, Piece, PieceKind, Square};
use serde::Serialize;
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// `Board` is `Copy`: every clone is an independent value, so simulating
/// a move on a copy can never disturb the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        let mut cells = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            cells[Color::Black.back_row() as usize][col] = Some(Piece::new(*kind, Color::Black));
            cells[Color::White.back_row() as usize][col] = Some(Piece::new(*kind, Color::White));
            cells[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            cells[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        Board { cells }
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns true if no piece stands on `sq`.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Clears `sq`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning any piece it displaced.
    ///
    /// Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove(from)?;
        let captured = self.remove(to);
        self.set(to, piece);
        captured
    }

    /// Iterates over occupied squares, rows first, then columns.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Locates the king of `color`, taking the first one found in row-major
    /// order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq("a2")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(board.is_empty_at(sq("e4")));
    }

    #[test]
    fn copies_do_not_alias() {
        let original = Board::standard();
        let mut copy = original;
        copy.remove(sq("e2"));
        assert!(copy.is_empty_at(sq("e2")));
        assert!(!original.is_empty_at(sq("e2")));
    }

    #[test]
    fn relocate_captures() {
        let mut board = Board::standard();
        let captured = board.relocate(sq("a1"), sq("a7"));
        assert_eq!(captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.is_empty_at(sq("a1")));
        assert_eq!(
            board.piece_at(sq("a7")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn relocate_from_empty_is_noop() {
        let mut board = Board::standard();
        assert_eq!(board.relocate(sq("e4"), sq("e7")), None);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn king_lookup() {
        let board = Board::standard();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn pieces_are_row_major() {
        let board = Board::standard();
        let first: Vec<Square> = board.pieces().take(2).map(|(s, _)| s).collect();
        assert_eq!(first, vec![sq("a8"), sq("b8")]);
        let white_first = board.pieces_of(Color::White).next().map(|(s, _)| s);
        assert_eq!(white_first, Some(sq("a2")));
    }
}
