//! Pseudo-legal move generation.
//!
//! Destinations produced here follow each piece's movement pattern and the
//! board's occupancy, but ignore whether the move exposes the mover's own
//! king. See [`crate::legal`] for the filtered variant.

use chess_core::{Board, Piece, PieceKind, Square};
use serde::{Serialize, Serializer};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A list of destination squares with a fixed maximum capacity.
///
/// A single piece reaches at most 27 squares (a centralized queen), so a
/// fixed-size array avoids heap allocations during generation.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; Self::MAX_SQUARES],
    len: usize,
}

impl SquareList {
    /// Capacity of the list.
    pub const MAX_SQUARES: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        SquareList {
            squares: [Square::A8; Self::MAX_SQUARES],
            len: 0,
        }
    }

    /// Adds a square to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_SQUARES);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only squares for which the predicate returns true, keeping
    /// their relative order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(self.squares[read]) {
                self.squares[write] = self.squares[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Serialize for SquareList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Generates the pseudo-legal destinations of the piece on `from`.
///
/// Returns an empty list if `from` is empty. Order is deterministic:
/// offsets and ray directions are visited in a fixed sequence.
pub fn pseudo_moves(board: &Board, from: Square) -> SquareList {
    let mut list = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return list;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, &mut list),
        PieceKind::Knight => step_moves(board, from, piece, &KNIGHT_OFFSETS, &mut list),
        PieceKind::King => step_moves(board, from, piece, &KING_OFFSETS, &mut list),
        PieceKind::Rook => ray_moves(board, from, piece, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Bishop => ray_moves(board, from, piece, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Queen => {
            ray_moves(board, from, piece, &ROOK_DIRECTIONS, &mut list);
            ray_moves(board, from, piece, &BISHOP_DIRECTIONS, &mut list);
        }
    }
    list
}

/// Returns true if the piece on `from` could pseudo-move onto `target`.
///
/// For pawns only diagonal steps can land on an occupied square, so the
/// answer is an attack test whenever `target` holds an opposing piece.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    pseudo_moves(board, from).contains(target)
}

fn pawn_moves(board: &Board, from: Square, pawn: Piece, list: &mut SquareList) {
    let dir = pawn.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty_at(one) {
            list.push(one);
            if from.row() == pawn.color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty_at(two) {
                        list.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = from.offset(dir, dc) {
            if matches!(board.piece_at(target), Some(other) if pawn.is_opponent_of(other)) {
                list.push(target);
            }
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    list: &mut SquareList,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc) {
            match board.piece_at(target) {
                Some(other) if !piece.is_opponent_of(other) => {}
                _ => list.push(target),
            }
        }
    }
}

fn ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    list: &mut SquareList,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => list.push(next),
                Some(other) => {
                    if piece.is_opponent_of(other) {
                        list.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
