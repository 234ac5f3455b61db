//! Knight movement
//!
//! Knights move in an L-shape: two squares along one axis and one along the
//! other. They jump, so no path check applies.

use crate::types::Square;

pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dr, df) = from.delta_to(to);
    let (dr, df) = (dr.abs(), df.abs());
    (dr == 2 && df == 1) || (dr == 1 && df == 2)
}
