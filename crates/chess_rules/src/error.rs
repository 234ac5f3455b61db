//! Error types for the rules engine
//!
//! Every way a move attempt can fail is a variant here. The controller's
//! text boundary ([`crate::game::Game::make_move`]) folds all of them into a
//! plain `false`; typed callers get the reason.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors that can occur while validating or applying moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Text that is not a file letter `a`-`h` followed by a rank digit `1`-`8`
    #[error("Invalid square notation: {notation:?}")]
    InvalidSquare { notation: String },

    /// Rank or file index outside 0-7
    #[error("Square index out of range: rank {rank}, file {file} (must be 0-7)")]
    SquareOutOfRange { rank: u8, file: u8 },

    /// Move text that does not contain exactly two squares
    #[error("Malformed move: {input:?}")]
    MalformedMove { input: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongTurn { square: Square, color: Color },

    /// The piece's movement rules do not allow this move
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The move would leave the mover's own king attacked
    #[error("Move from {from} to {to} leaves the king in check")]
    LeavesKingInCheck { from: Square, to: Square },

    /// A pawn is waiting for its promotion piece
    #[error("Promotion pending on {square}")]
    PromotionPending { square: Square },

    #[error("No promotion is pending")]
    NoPendingPromotion,
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
