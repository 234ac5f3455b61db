//! Pawn promotion
//!
//! When a pawn lands on the last rank, the board does not ask anybody for a
//! piece. It records a [`PendingPromotion`] and reports
//! [`crate::board::MoveEffect::PromotionPending`]; the caller obtains a
//! [`PromotionChoice`] however it likes (terminal prompt, fixed answer, UI)
//! and hands it back through [`crate::board::Board::complete_promotion`].
//!
//! [`PromotionPrompt`] is the hook for callers that want to resolve the choice
//! in the same call as the move (see [`crate::game::Game::play`]).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::BOARD_SIZE;
use crate::types::{Color, Piece, PieceKind, Square};

/// Piece a pawn may promote to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// Interpret a free-form answer to the promotion question
    ///
    /// Accepts the menu numbers `1`-`4` (Queen, Rook, Bishop, Knight), the
    /// piece letters `q r b n` and the full English names, in any case. Anything
    /// else, including an empty answer, means Queen.
    pub fn from_response(response: &str) -> Self {
        match response.trim().to_ascii_lowercase().as_str() {
            "1" | "q" | "queen" => PromotionChoice::Queen,
            "2" | "r" | "rook" => PromotionChoice::Rook,
            "3" | "b" | "bishop" => PromotionChoice::Bishop,
            "4" | "n" | "knight" => PromotionChoice::Knight,
            other => {
                warn!(
                    "[PROMOTION] Unrecognised choice {:?}, promoting to Queen",
                    other
                );
                PromotionChoice::Queen
            }
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}

/// A pawn waiting on the last rank for its replacement piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    /// Where the pawn landed
    pub square: Square,
    /// Color of the pawn, and of the piece that replaces it
    pub color: Color,
}

/// Supplies the promotion piece when a move needs one
pub trait PromotionPrompt {
    fn choose(&mut self, pending: PendingPromotion) -> PromotionChoice;
}

/// A fixed choice answers every prompt the same way
impl PromotionPrompt for PromotionChoice {
    fn choose(&mut self, _pending: PendingPromotion) -> PromotionChoice {
        *self
    }
}

/// Is `piece` a pawn standing on either far rank?
pub fn is_promotion_square(piece: Piece, square: Square) -> bool {
    piece.kind == PieceKind::Pawn && (square.rank() == 0 || square.rank() as usize == BOARD_SIZE - 1)
}
