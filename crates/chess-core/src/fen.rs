//! FEN piece-placement parsing and serialization.
//!
//! Only the first FEN field is understood. Castling rights, en passant
//! targets and move clocks have no counterpart in this game model.

use crate::{Board, Piece, Square};
use thiserror::Error;

/// Piece placement of the standard starting position.
pub const STARTPOS_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing a piece placement.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid piece placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

impl Board {
    /// Builds a board from the piece-placement field of a FEN string.
    ///
    /// Ranks are listed from 8 down to 1, so the first rank string fills
    /// row 0. Any fields after the first whitespace are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col = 0u32;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 || digit > 8 {
                        return Err(FenError::InvalidCharacter { ch: c, rank });
                    }
                    col += digit;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::new(row as u8, col as u8) {
                        board.set(sq, piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidCharacter { ch: c, rank });
                }
                if col > 8 {
                    return Err(FenError::InvalidRankLength { rank, squares: col });
                }
            }
            if col != 8 {
                return Err(FenError::InvalidRankLength { rank, squares: col });
            }
        }
        Ok(board)
    }

    /// Serializes the board as a FEN piece-placement string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                let piece = Square::new(row, col).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(p) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(p.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }
}
