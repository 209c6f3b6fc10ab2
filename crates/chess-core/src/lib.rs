//! Core types for chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for a from/to pair and its `"e2e4"` notation
//! - [`Board`], the 8x8 grid of optional pieces
//! - FEN piece-placement parsing and serialization

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::{FenError, STARTPOS_PLACEMENT};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{is_on_board, Square};
