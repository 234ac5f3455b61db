//! Queen movement
//!
//! The queen is the union of rook and bishop movement. The line shape picks
//! which of the two rules applies; a move that is neither straight nor
//! diagonal is rejected.

use super::{bishop, rook, sliding};
use crate::board::Board;
use crate::types::Square;

pub fn is_valid_queen_move(from: Square, to: Square, board: &Board) -> bool {
    if sliding::is_straight(from, to) {
        rook::is_valid_rook_move(from, to, board)
    } else if sliding::is_diagonal(from, to) {
        bishop::is_valid_bishop_move(from, to, board)
    } else {
        false
    }
}
