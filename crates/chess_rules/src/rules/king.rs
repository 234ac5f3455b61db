//! King movement and castling
//!
//! ## King Movement Rules
//!
//! - One square in any direction
//! - A two-file move along its own rank is a castling attempt
//!
//! ## Castling Conditions
//!
//! A castling attempt from `from` to `to` (same rank, two files apart) is
//! allowed only when:
//!
//! 1. the destination is empty
//! 2. a rook of the king's color stands in the corner on that side
//!    (file 7 when moving right, file 0 when moving left) of the same rank
//! 3. neither the king's square nor that corner has been moved from or onto
//!    since the board was set up (see [`Board::is_touched`])
//! 4. every square between the king and the rook is empty
//! 5. the king is not in check
//! 6. the square the king crosses is not attacked
//!
//! The check in (5) reuses the board's attack query. Because the destination
//! must already be empty (1), that query never reaches back into castling:
//! a king's square is never empty.

use serde::{Deserialize, Serialize};

use super::sliding;
use crate::board::Board;
use crate::constants::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::types::{Color, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// Side of a two-file king move, by the sign of the file delta
    pub fn of_move(from: Square, to: Square) -> Self {
        if to.file() > from.file() {
            CastlingSide::Kingside
        } else {
            CastlingSide::Queenside
        }
    }

    /// File delta of one king step toward this side
    #[inline]
    pub fn direction(self) -> i8 {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }

    #[inline]
    pub fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_ROOK_FILE,
            CastlingSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    /// Corner the rook starts from, on the king's rank
    pub fn rook_corner(self, king_from: Square) -> Square {
        Square::new_unchecked(king_from.rank(), self.rook_file())
    }

    /// Where the rook lands: next to the king's destination, on the side the king came from
    pub fn rook_destination(self, king_to: Square) -> Option<Square> {
        king_to.offset(0, -self.direction())
    }
}

pub fn is_valid_king_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if is_single_step(from, to) {
        return true;
    }
    if is_castling_shape(from, to) {
        return can_castle(color, from, to, board);
    }
    false
}

/// One step in any direction
#[inline]
pub fn is_single_step(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta_to(to);
    from != to && dr.abs() <= 1 && df.abs() <= 1
}

/// Same rank, two files apart
#[inline]
pub fn is_castling_shape(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta_to(to);
    dr == 0 && df.abs() == 2
}

pub fn can_castle(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if !is_castling_shape(from, to) || !board.is_empty(to) {
        return false;
    }

    let side = CastlingSide::of_move(from, to);
    let corner = side.rook_corner(from);

    let rook_in_corner = board
        .get_piece(corner)
        .is_some_and(|piece| piece.is(PieceKind::Rook, color));
    if !rook_in_corner {
        return false;
    }

    if board.is_touched(from) || board.is_touched(corner) {
        return false;
    }

    if !sliding::is_path_clear(from, corner, board) {
        return false;
    }

    if board.is_in_check(color) {
        return false;
    }

    from.offset(0, side.direction())
        .is_some_and(|crossed| !board.is_square_attacked(crossed, !color))
}
