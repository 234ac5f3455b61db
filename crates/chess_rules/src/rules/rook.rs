//! Rook movement
//!
//! - Moves along its rank or its file, any distance
//! - Cannot jump over pieces

use super::sliding;
use crate::board::Board;
use crate::types::Square;

pub fn is_valid_rook_move(from: Square, to: Square, board: &Board) -> bool {
    sliding::is_straight(from, to) && sliding::is_path_clear(from, to, board)
}
