//! Rules engine for two-player chess on a shared device.
//!
//! This crate provides:
//! - [`pseudo_moves`] - per-piece movement patterns, ignoring self-check
//! - [`is_in_check`] - king attack detection
//! - [`legal_moves`] / [`has_any_legal_moves`] - self-check filtering by
//!   simulating each candidate on a copy of the board
//! - [`Game`] - the authoritative [`GameState`] and its transitions
//!
//! Castling, en passant, underpromotion and the draw rules other than
//! stalemate are not part of this game model. Pawns always promote to a
//! queen.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::{Game, Status};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! let targets = game.select_square(e2);
//! assert!(targets.contains(e4));
//!
//! let state = game.execute(e2, e4);
//! assert_eq!(state.history()[0].notation, "e2e4");
//! assert_eq!(game.status(), Status::Ongoing);
//! ```

pub mod check;
mod game;
pub mod legal;
pub mod movegen;

pub use check::{is_in_check, is_reachable_by};
pub use game::{BoardError, ClickOutcome, Game, GameMove, GameState, MoveRejection, Status};
pub use legal::{all_legal_moves, has_any_legal_moves, legal_moves};
pub use movegen::{attacks, pseudo_moves, SquareList};
