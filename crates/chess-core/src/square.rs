//! Board square representation.

use serde::Serialize;
use std::fmt;

/// Returns true iff both coordinates lie in `[0, 8)`.
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

/// A square on the board, addressed by zero-based `(row, col)`.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
/// Column 0 is the a-file. A `Square` is always on the board; off-board
/// coordinates never produce one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` if either coordinate is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: 8 - (rank - b'0'),
            col: file - b'a',
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square displaced by `(dr, dc)`, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// File letter, `'a' + col`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, `8 - row`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic name of this square (e.g., row 0/col 0 is "a8").
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares, rows first, then columns.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }

    /// The top-left square, row 0 column 0.
    pub const A8: Square = Square { row: 0, col: 0 };
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn bounds() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(!is_on_board(-1, 3));
        assert!(!is_on_board(3, 8));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_names() {
        assert_eq!(sq(0, 0).to_algebraic(), "a8");
        assert_eq!(sq(7, 7).to_algebraic(), "h1");
        assert_eq!(sq(6, 4).to_algebraic(), "e2");
        assert_eq!(sq(4, 4).to_string(), "e4");
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(sq(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(sq(7, 7)));
        assert_eq!(Square::from_algebraic("E2"), Some(sq(6, 4)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(sq(6, 4).offset(-2, 0), Some(sq(4, 4)));
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(7, 7).offset(0, 1), None);
        assert_eq!(sq(3, 3).offset(2, -1), Some(sq(5, 2)));
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], sq(0, 0));
        assert_eq!(squares[1], sq(0, 1));
        assert_eq!(squares[8], sq(1, 0));
        assert_eq!(squares[63], sq(7, 7));
    }

    proptest! {
        #[test]
        fn algebraic_round_trip(row in 0u8..8, col in 0u8..8) {
            let s = sq(row, col);
            prop_assert_eq!(Square::from_algebraic(&s.to_algebraic()), Some(s));
            prop_assert_eq!(Square::new(s.row(), s.col()), Some(s));
        }
    }
}
