//! Board geometry and setup constants

use crate::types::PieceKind;

pub const BOARD_SIZE: usize = 8;

/// File index of the queenside rook corner
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// File index of the kingside rook corner
pub const KINGSIDE_ROOK_FILE: u8 = 7;

/// Back-rank order from the `a` file to the `h` file
pub const BACK_RANK_SETUP: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
