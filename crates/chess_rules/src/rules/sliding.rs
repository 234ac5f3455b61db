//! Path clearance for sliding pieces
//!
//! Rooks, bishops and queens cannot jump. A move along a rank, file or
//! diagonal is only possible when every square strictly between the start
//! and the end is empty. The end square itself is not inspected here:
//! whether it may be entered (empty or enemy) is decided by
//! [`super::is_valid_move`].

use crate::board::Board;
use crate::types::Square;

/// Is `from`-`to` a straight line (same rank or same file)?
#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    from != to && (from.rank() == to.rank() || from.file() == to.file())
}

/// Is `from`-`to` a diagonal line?
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta_to(to);
    dr != 0 && dr.abs() == df.abs()
}

/// Check that every square strictly between `from` and `to` is empty
///
/// Only meaningful for straight or diagonal lines; callers check the line
/// shape first. Adjacent squares have nothing in between and are always clear.
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (dr, df) = from.delta_to(to);
    let step = (dr.signum(), df.signum());

    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}
