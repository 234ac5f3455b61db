//! Pawn movement
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent into an empty square
//! - **Double push**: two squares from the pawn's starting rank; both the
//!   skipped square and the destination must be empty
//! - **Captures**: one square diagonally forward onto an opposing piece
//! - **En passant**: one square diagonally forward onto the board's
//!   en-passant target, capturing the opposing pawn that just skipped it
//!
//! White pawns advance toward rank index 0, Black pawns toward rank index 7
//! (see [`Color::forward`]). Promotion is not a movement rule; the board
//! handles it when a pawn lands on the last rank.

use crate::board::Board;
use crate::types::{Color, PieceKind, Square};

pub fn is_valid_pawn_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dr, df) = from.delta_to(to);
    let forward = color.forward();

    if df == 0 {
        // Single push
        if dr == forward {
            return board.is_empty(to);
        }
        // Double push from the starting rank
        if dr == 2 * forward && from.rank() == color.pawn_rank() {
            let skipped = from.offset(forward, 0);
            return skipped.is_some_and(|square| board.is_empty(square)) && board.is_empty(to);
        }
        return false;
    }

    if df.abs() == 1 && dr == forward {
        if let Some(target) = board.get_piece(to) {
            return target.color != color;
        }
        return is_en_passant_capture(color, from, to, board);
    }

    false
}

/// Does a diagonal step from `from` to `to` capture en passant?
///
/// `to` must be the board's en-passant target and the square beside the
/// pawn (same rank as `from`, same file as `to`) must hold an opposing pawn.
pub fn is_en_passant_capture(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dr, df) = from.delta_to(to);
    if dr != color.forward() || df.abs() != 1 || board.en_passant_target() != Some(to) {
        return false;
    }
    board
        .get_piece(en_passant_victim(from, to))
        .is_some_and(|victim| victim.is(PieceKind::Pawn, !color))
}

/// Square of the pawn removed by an en-passant capture from `from` to `to`
#[inline]
pub fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::new_unchecked(from.rank(), to.file())
}

/// Pawns attack the two squares diagonally in front of them, whether or not
/// anything stands there
#[inline]
pub fn attacks_square(color: Color, from: Square, target: Square) -> bool {
    let (dr, df) = from.delta_to(target);
    dr == color.forward() && df.abs() == 1
}
