//! Bishop movement
//!
//! - Moves diagonally (equal rank and file distance), any distance
//! - Cannot jump over pieces

use super::sliding;
use crate::board::Board;
use crate::types::Square;

pub fn is_valid_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    sliding::is_diagonal(from, to) && sliding::is_path_clear(from, to, board)
}
