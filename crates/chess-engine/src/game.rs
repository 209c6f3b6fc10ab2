//! Game management: the authoritative state and its transitions.
//!
//! The [`Game`] struct owns exactly one [`GameState`] snapshot. Every
//! accepted move produces a successor snapshot that replaces the old one
//! wholesale; rejected requests leave it untouched.

use crate::check::is_in_check;
use crate::legal::{has_any_legal_moves, legal_moves};
use crate::movegen::SquareList;
use chess_core::{Board, Color, FenError, Move, Piece, PieceKind, Square};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMove {
    /// The piece that moved, as it was before any promotion.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Kind of the piece taken on `to`, if any.
    pub captured: Option<PieceKind>,
    /// The opponent was left in check.
    pub is_check: bool,
    /// The opponent was left checkmated.
    pub is_checkmate: bool,
    /// The moving pawn was replaced by a queen.
    pub promoted: bool,
    /// Coordinate notation, e.g. "e2e4".
    pub notation: String,
}

impl GameMove {
    /// The from/to pair of this record.
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    /// Notation with a `+` or `#` suffix when the move gave check or mate.
    pub fn annotated(&self) -> String {
        if self.is_checkmate {
            format!("{}#", self.notation)
        } else if self.is_check {
            format!("{}+", self.notation)
        } else {
            self.notation.clone()
        }
    }
}

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Status {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl Status {
    /// Returns true for checkmate and stalemate.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::Stalemate)
    }
}

/// Reason a move request was refused. The game state is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("the game is over")]
    GameOver,

    #[error("{from} is not the selected square")]
    NotSelected { from: Square },

    #[error("{to} is not a legal destination from {from}")]
    NotACandidate { from: Square, to: Square },
}

/// Error constructing a game from a custom position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} has no king")]
    MissingKing(Color),

    #[error(transparent)]
    Fen(#[from] FenError),
}

/// What a square click did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece of the side to move was selected; these are its destinations.
    Selected(SquareList),
    /// The previous selection was dropped.
    Deselected,
    /// The selected piece moved to the clicked square.
    Moved(GameMove),
}

/// An immutable snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    candidates: SquareList,
    is_check: bool,
    is_checkmate: bool,
    is_stalemate: bool,
    winner: Option<Color>,
    captured_white: Vec<PieceKind>,
    captured_black: Vec<PieceKind>,
    history: Vec<GameMove>,
}

impl GameState {
    /// The standard starting position with White to move.
    pub fn initial() -> Self {
        Self::from_position(Board::standard(), Color::White)
    }

    fn from_position(board: Board, turn: Color) -> Self {
        let is_check = is_in_check(&board, turn);
        let has_moves = has_any_legal_moves(&board, turn);
        GameState {
            board,
            turn,
            selected: None,
            candidates: SquareList::new(),
            is_check,
            is_checkmate: !has_moves && is_check,
            is_stalemate: !has_moves && !is_check,
            winner: (!has_moves && is_check).then(|| turn.opposite()),
            captured_white: Vec::new(),
            captured_black: Vec::new(),
            history: Vec::new(),
        }
    }

    /// A read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the selected piece; empty without a selection.
    pub fn candidates(&self) -> &SquareList {
        &self.candidates
    }

    pub fn is_check(&self) -> bool {
        self.is_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.is_stalemate
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true once the game has ended in checkmate or stalemate.
    pub fn is_over(&self) -> bool {
        self.is_checkmate || self.is_stalemate
    }

    pub fn status(&self) -> Status {
        match (self.is_checkmate, self.is_stalemate, self.winner) {
            (true, _, Some(winner)) => Status::Checkmate { winner },
            (_, true, _) => Status::Stalemate,
            _ if self.is_check => Status::Check,
            _ => Status::Ongoing,
        }
    }

    /// Kinds of White pieces captured so far, in capture order.
    pub fn captured_white(&self) -> &[PieceKind] {
        &self.captured_white
    }

    /// Kinds of Black pieces captured so far, in capture order.
    pub fn captured_black(&self) -> &[PieceKind] {
        &self.captured_black
    }

    /// Captured pieces of `color`.
    pub fn captured(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    /// Completed moves, oldest first. Even indices are White's.
    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<&GameMove> {
        self.history.last()
    }

    /// Number of completed plies.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Plays `piece` from `from` to `to` and returns the resulting snapshot.
    ///
    /// The caller has established that the move is legal for the side to move.
    fn successor(&self, piece: Piece, from: Square, to: Square) -> GameState {
        let mut board = self.board;
        let mut captured_white = self.captured_white.clone();
        let mut captured_black = self.captured_black.clone();

        let captured = board.relocate(from, to);
        if let Some(taken) = captured {
            match taken.color {
                Color::White => captured_white.push(taken.kind),
                Color::Black => captured_black.push(taken.kind),
            }
        }

        let promoted = piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        if promoted {
            board.set(to, Piece::new(PieceKind::Queen, piece.color));
        }

        let next_turn = self.turn.opposite();
        let next_in_check = is_in_check(&board, next_turn);
        let next_has_moves = has_any_legal_moves(&board, next_turn);
        let is_checkmate = !next_has_moves && next_in_check;
        let is_stalemate = !next_has_moves && !next_in_check;

        let mut history = self.history.clone();
        history.push(GameMove {
            piece,
            from,
            to,
            captured: captured.map(|p| p.kind),
            is_check: next_in_check,
            is_checkmate,
            promoted,
            notation: Move::new(from, to).notation(),
        });

        GameState {
            board,
            turn: next_turn,
            selected: None,
            candidates: SquareList::new(),
            is_check: next_in_check,
            is_checkmate,
            is_stalemate,
            winner: is_checkmate.then_some(self.turn),
            captured_white,
            captured_black,
            history,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A two-player game on one device.
///
/// Mutation goes through [`select_square`](Game::select_square),
/// [`execute`](Game::execute), [`click`](Game::click) and
/// [`reset`](Game::reset). Readers get the current snapshot by reference
/// or as an owned copy.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            state: GameState::initial(),
        }
    }

    /// Creates a game from a custom position with `turn` to move.
    ///
    /// Both sides need a king. The position may already be terminal.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, BoardError> {
        for color in [Color::White, Color::Black] {
            if board.king_square(color).is_none() {
                return Err(BoardError::MissingKing(color));
            }
        }
        Ok(Game {
            state: GameState::from_position(board, turn),
        })
    }

    /// Creates a game from a FEN piece placement with `turn` to move.
    pub fn from_fen(fen: &str, turn: Color) -> Result<Self, BoardError> {
        Self::from_board(Board::from_fen(fen)?, turn)
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current snapshot.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Selects the piece on `sq` if it belongs to the side to move and
    /// returns its legal destinations.
    ///
    /// Anything else (empty square, opponent piece, finished game) leaves
    /// the selection as it was and returns an empty list.
    pub fn select_square(&mut self, sq: Square) -> SquareList {
        if self.state.is_over() {
            return SquareList::new();
        }
        match self.state.board.piece_at(sq) {
            Some(piece) if piece.color == self.state.turn => {
                let moves = legal_moves(&self.state.board, sq);
                self.state.selected = Some(sq);
                self.state.candidates = moves;
                moves
            }
            _ => SquareList::new(),
        }
    }

    /// Drops the current selection.
    pub fn deselect(&mut self) {
        self.state.selected = None;
        self.state.candidates.clear();
    }

    /// Moves the selected piece from `from` to `to`.
    ///
    /// `from` must be the selected square and `to` one of its cached
    /// legal destinations. On rejection the state is unchanged.
    pub fn try_execute(&mut self, from: Square, to: Square) -> Result<&GameState, MoveRejection> {
        if self.state.is_over() {
            return Err(MoveRejection::GameOver);
        }
        if self.state.selected != Some(from) {
            return Err(MoveRejection::NotSelected { from });
        }
        if !self.state.candidates.contains(to) {
            return Err(MoveRejection::NotACandidate { from, to });
        }
        let piece = match self.state.board.piece_at(from) {
            Some(piece) if piece.color == self.state.turn => piece,
            _ => return Err(MoveRejection::NotSelected { from }),
        };

        self.state = self.state.successor(piece, from, to);

        if let Some(record) = self.state.last_move() {
            debug!(
                notation = %record.notation,
                piece = %record.piece,
                captured = ?record.captured,
                check = record.is_check,
                "move applied"
            );
        }
        match self.state.status() {
            Status::Checkmate { winner } => info!(%winner, "checkmate"),
            Status::Stalemate => info!("stalemate"),
            _ => {}
        }
        Ok(&self.state)
    }

    /// Like [`try_execute`](Game::try_execute), but a rejected move is a
    /// silent no-op. Returns the current snapshot either way.
    pub fn execute(&mut self, from: Square, to: Square) -> &GameState {
        if let Err(reason) = self.try_execute(from, to) {
            debug!(%from, %to, %reason, "move rejected");
        }
        &self.state
    }

    /// Interprets a click on `sq` the way a board surface would: select
    /// an own piece, move the selection to a legal destination, or drop
    /// the selection.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if self.state.is_over() {
            return ClickOutcome::Ignored;
        }

        let own_piece = matches!(
            self.state.board.piece_at(sq),
            Some(piece) if piece.color == self.state.turn
        );
        if own_piece {
            return ClickOutcome::Selected(self.select_square(sq));
        }

        let Some(from) = self.state.selected else {
            return ClickOutcome::Ignored;
        };
        if self.state.candidates.contains(sq) {
            return match self.try_execute(from, sq) {
                Ok(state) => match state.last_move() {
                    Some(record) => ClickOutcome::Moved(record.clone()),
                    None => ClickOutcome::Ignored,
                },
                Err(_) => ClickOutcome::Ignored,
            };
        }
        self.deselect();
        ClickOutcome::Deselected
    }

    /// Discards the game and starts over from the initial position.
    pub fn reset(&mut self) -> &GameState {
        info!(plies = self.state.ply_count(), "game reset");
        self.state = GameState::initial();
        &self.state
    }

    /// Selects `from` and moves to `to` in one step.
    ///
    /// Convenience for callers that already hold a complete move, such as
    /// a replay of coordinate notation.
    pub fn play(&mut self, m: Move) -> Result<&GameState, MoveRejection> {
        self.select_square(m.from);
        self.try_execute(m.from, m.to)
    }
}
