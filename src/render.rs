//! Plain-text board display
//!
//! ```text
//!    a b c d e f g h
//!  +-----------------+
//! 8| ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ |8
//! ...
//! 1| ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ |1
//!  +-----------------+
//!    a b c d e f g h
//! ```

use chess_rules::constants::BOARD_SIZE;
use chess_rules::{Board, Square};

const FILES: &str = "   a b c d e f g h";
const BORDER: &str = " +-----------------+";

pub fn render_board(board: &Board) -> String {
    let mut out = format!("{FILES}\n{BORDER}\n");

    for rank in 0..BOARD_SIZE as u8 {
        let label = BOARD_SIZE as u8 - rank;
        let cells: Vec<String> = Square::all()
            .filter(|sq| sq.rank() == rank)
            .map(|square| board.get_piece(square).map_or('_', |piece| piece.symbol()).to_string())
            .collect();
        out.push_str(&format!("{label}| {} |{label}\n", cells.join(" ")));
    }

    out.push_str(&format!("{BORDER}\n{FILES}\n"));
    out
}
