//! Chess rules module - per-piece movement grammar
//!
//! Answers one question for every piece kind: "sitting on `from`, may this
//! piece reach `to` on the current board?" The answer ignores whose turn it
//! is and whether the move exposes the mover's own king; the controller in
//! [`crate::game`] layers those checks on top.
//!
//! # Module Structure
//!
//! - `pawn` - pushes, double push, diagonal and en-passant captures
//! - `knight` - L-shaped jumps
//! - `bishop` / `rook` / `queen` - sliding lines, with `sliding` path clearance
//! - `king` - single steps and castling
//!
//! # Two Predicates
//!
//! - [`is_valid_move`]: may the piece *move* there? Rejects `from == to` and
//!   any destination held by a piece of the mover's own color, then applies
//!   the kind's rule.
//! - [`attacks`]: does the piece *attack* that square? Same geometry, except
//!   that pawns attack only their two forward diagonals, kings only their
//!   single steps (castling never captures), and the occupant of the target
//!   square is ignored. Check detection uses this one.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


pub use king::CastlingSide;

use crate::board::Board;
use crate::types::{Piece, PieceKind, Square};

/// Check if `piece` standing on `from` may move to `to`
pub fn is_valid_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    // Can't stay in place
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if let Some(target) = board.get_piece(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn::is_valid_pawn_move(piece.color, from, to, board),
        PieceKind::Rook => rook::is_valid_rook_move(from, to, board),
        PieceKind::Knight => knight::is_valid_knight_move(from, to),
        PieceKind::Bishop => bishop::is_valid_bishop_move(from, to, board),
        PieceKind::Queen => queen::is_valid_queen_move(from, to, board),
        PieceKind::King => king::is_valid_king_move(piece.color, from, to, board),
    }
}

/// Check if `piece` standing on `from` attacks `target`
pub fn attacks(piece: Piece, from: Square, target: Square, board: &Board) -> bool {
    if from == target {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn::attacks_square(piece.color, from, target),
        PieceKind::Rook => rook::is_valid_rook_move(from, target, board),
        PieceKind::Knight => knight::is_valid_knight_move(from, target),
        PieceKind::Bishop => bishop::is_valid_bishop_move(from, target, board),
        PieceKind::Queen => queen::is_valid_queen_move(from, target, board),
        PieceKind::King => king::is_single_step(from, target),
    }
}

/// All destinations `piece` on `from` may move to
pub fn possible_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(piece, from, to, board))
        .collect()
}

impl Piece {
    /// Ignoring turn order and own-king safety, may this piece move from `from` to `to`?
    ///
    /// See [`is_valid_move`].
    #[inline]
    pub fn is_valid_move(&self, from: Square, to: Square, board: &Board) -> bool {
        is_valid_move(*self, from, to, board)
    }
}
