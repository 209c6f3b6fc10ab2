//! Check detection.

use crate::movegen::attacks;
use chess_core::{Board, Color, Square};
use tracing::warn;

/// Returns true if the king of `color` is attacked by any opposing piece.
///
/// The king is the first one found scanning rows, then columns. A board
/// without a king of `color` is reported as in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        warn!(%color, board = ?board, "no king on board, treating as check");
        return true;
    };
    is_reachable_by(board, king, color.opposite())
}

/// Returns true if any piece of `by` can pseudo-move onto `target`.
pub fn is_reachable_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| attacks(board, from, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn start_position_not_in_check() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_gives_check_along_file() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4RK2").unwrap();
        assert!(is_in_check(&board, Color::Black));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn blocked_ray_is_not_check() {
        let board = Board::from_fen("4k3/4p3/8/8/8/8/8/4RK2").unwrap();
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let diagonal = Board::from_fen("8/8/8/8/8/8/3p4/4K2k").unwrap();
        assert!(is_in_check(&diagonal, Color::White));

        let in_front = Board::from_fen("8/8/8/8/8/8/4p3/4K2k").unwrap();
        assert!(!is_in_check(&in_front, Color::White));
    }

    #[test]
    fn knight_check() {
        let board = Board::from_fen("4k3/8/3N4/8/8/8/8/4K3").unwrap();
        assert!(is_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_counts_as_check() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/8").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn reachability() {
        let board = Board::standard();
        assert!(is_reachable_by(&board, sq("e3"), Color::White));
        assert!(is_reachable_by(&board, sq("f3"), Color::White));
        assert!(!is_reachable_by(&board, sq("e5"), Color::White));
    }
}
