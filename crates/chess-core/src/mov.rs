//! Move representation.

use crate::Square;
use serde::Serialize;
use std::fmt;

/// A move from one square to another.
///
/// Promotion is never encoded: pawns reaching the last row always become
/// queens, so the origin and destination identify a move completely.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_notation(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_notation() {
        let e2 = Square::new(6, 4).unwrap();
        let e4 = Square::new(4, 4).unwrap();
        let m = Move::new(e2, e4);
        assert_eq!(m.notation(), "e2e4");
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }

    #[test]
    fn move_from_notation() {
        let m = Move::from_notation("g1f3").unwrap();
        assert_eq!(m.from.to_algebraic(), "g1");
        assert_eq!(m.to.to_algebraic(), "f3");

        assert!(Move::from_notation("invalid").is_none());
        assert!(Move::from_notation("e2e9").is_none());
        assert!(Move::from_notation("e2").is_none());
        assert!(Move::from_notation("e7e8q").is_none());
        assert!(Move::from_notation("é2e4").is_none());
    }
}
