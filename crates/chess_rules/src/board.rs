//! # Board - Grid, En Passant, Promotion and Check Queries
//!
//! ## Overview
//!
//! The [`Board`] is an 8x8 grid of optional pieces plus the transient state
//! that move history leaves behind:
//!
//! - **en-passant target**: the square a pawn skipped on the most recent move,
//!   if that move was a two-square pawn advance; cleared by every other move
//! - **touched mask**: one bit per square, set for both ends of every move;
//!   castling needs the king's square and the rook's corner untouched
//! - **pending promotion**: a pawn that reached the last rank and is waiting
//!   for [`Board::complete_promotion`]
//!
//! ## Board-Wide Queries
//!
//! - [`Board::find_king`] - linear scan for a color's king
//! - [`Board::is_square_attacked`] - any piece of a color attacking a square
//! - [`Board::is_in_check`] - is a color's king attacked?
//! - [`Board::is_checkmate`] - in check, and no move of that color gets out
//!
//! The checkmate search mutates the grid while probing and therefore takes
//! `&mut self`: nothing else can look at the board until it has put every
//! probe back.
//!
//! ## Coordinates
//!
//! See [`crate::types`]: rank index 0 is the top (Black's back rank),
//! file index 0 is the `a` file.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{BACK_RANK_SETUP, BOARD_SIZE};
use crate::error::{RulesError, RulesResult};
use crate::make_unmake::MovePlan;
use crate::promotion::{is_promotion_square, PendingPromotion, PromotionChoice};
use crate::rules;
use crate::types::{Color, Piece, PieceKind, Square};

/// What [`Board::move_piece`] did besides relocating the piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEffect {
    /// The piece moved; `captured` is whatever stood on the destination
    Relocated { captured: Option<Piece> },
    /// A pawn reached the last rank and waits for [`Board::complete_promotion`]
    PromotionPending {
        square: Square,
        captured: Option<Piece>,
    },
}

impl MoveEffect {
    pub fn captured(&self) -> Option<Piece> {
        match *self {
            MoveEffect::Relocated { captured } | MoveEffect::PromotionPending { captured, .. } => {
                captured
            }
        }
    }

    pub fn promotion_square(&self) -> Option<Square> {
        match *self {
            MoveEffect::PromotionPending { square, .. } => Some(square),
            MoveEffect::Relocated { .. } => None,
        }
    }
}

/// Chess board state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    en_passant_target: Option<Square>,
    touched: u64,
    pending_promotion: Option<PendingPromotion>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position
    ///
    /// Black's pieces occupy rank indices 0-1, White's 6-7, with the back rank
    /// ordered Rook-Knight-Bishop-Queen-King-Bishop-Knight-Rook from the `a` file.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_SETUP.iter().enumerate() {
            let file = file as u8;
            for color in [Color::White, Color::Black] {
                board.set_cell(
                    Square::new_unchecked(color.back_rank(), file),
                    Some(Piece::new(*kind, color)),
                );
                board.set_cell(
                    Square::new_unchecked(color.pawn_rank(), file),
                    Some(Piece::pawn(color)),
                );
            }
        }
        board
    }

    /// Board with no pieces, for setting up custom positions
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            en_passant_target: None,
            touched: 0,
            pending_promotion: None,
        }
    }

    /// Get the piece at `square`, if any
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    /// Put `piece` on `square`, returning the previous occupant
    ///
    /// Setup operation: does not count as a move and leaves the en-passant
    /// target and touched mask alone.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.get_piece(square);
        self.set_cell(square, Some(piece));
        previous
    }

    /// Take whatever stands on `square` off the board
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.take_cell(square)
    }

    /// Every occupied square with its piece, row by row from the top-left corner
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get_piece(square).map(|piece| (square, piece)))
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Override the en-passant target, for custom positions
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Has a move started from or landed on `square`?
    #[inline]
    pub fn is_touched(&self, square: Square) -> bool {
        self.touched & (1u64 << square.index()) != 0
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take_cell(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank() as usize][square.file() as usize].take()
    }

    /// Relocate whatever stands on `start` to `end`, capturing any occupant of `end`
    ///
    /// No legality check is made here. Side effects:
    ///
    /// - the en-passant target becomes the skipped square if the piece is a pawn
    ///   moving exactly two ranks, and is cleared otherwise
    /// - both squares are marked touched
    /// - a pawn landing on rank index 0 or 7 leaves a [`PendingPromotion`] and the
    ///   result is [`MoveEffect::PromotionPending`]
    ///
    /// # Errors
    ///
    /// [`RulesError::NoPieceAtSquare`] if `start` is empty; the board is unchanged.
    pub fn move_piece(&mut self, start: Square, end: Square) -> RulesResult<MoveEffect> {
        let piece = self
            .take_cell(start)
            .ok_or(RulesError::NoPieceAtSquare { square: start })?;
        let captured = self.get_piece(end);
        self.set_cell(end, Some(piece));

        self.touched |= (1u64 << start.index()) | (1u64 << end.index());

        let (dr, _) = start.delta_to(end);
        self.en_passant_target = if piece.kind == PieceKind::Pawn && dr.abs() == 2 {
            start.offset(dr.signum(), 0)
        } else {
            None
        };

        if is_promotion_square(piece, end) {
            info!("[PROMOTION] {} pawn on {} awaits promotion", piece.color, end);
            self.pending_promotion = Some(PendingPromotion {
                square: end,
                color: piece.color,
            });
            return Ok(MoveEffect::PromotionPending {
                square: end,
                captured,
            });
        }

        Ok(MoveEffect::Relocated { captured })
    }

    /// Replace the waiting pawn with the chosen piece of the same color
    ///
    /// # Errors
    ///
    /// [`RulesError::NoPendingPromotion`] if no pawn is waiting.
    pub fn complete_promotion(&mut self, choice: PromotionChoice) -> RulesResult<Piece> {
        let pending = self
            .pending_promotion
            .take()
            .ok_or(RulesError::NoPendingPromotion)?;
        let promoted = Piece::new(choice.kind(), pending.color);
        self.set_cell(pending.square, Some(promoted));
        info!(
            "[PROMOTION] Pawn on {} promoted to {:?}",
            pending.square, choice
        );
        Ok(promoted)
    }

    /// Square of `color`'s king, scanning from the top-left corner
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }

    /// Check if any piece of `by_color` attacks `square`
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.color == by_color)
            .any(|(from, piece)| rules::attacks(piece, from, square, self))
    }

    /// Is `color`'s king attacked? A board without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => false,
        }
    }

    /// Is `color` in check with no move that gets out of it?
    ///
    /// Tries every move of every `color` piece as a reversible probe and stops
    /// at the first one after which the king is no longer attacked. The board is
    /// identical before and after the call.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        let defenders: Vec<(Square, Piece)> = self
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .collect();

        for (from, piece) in defenders {
            for to in Square::all() {
                if !piece.is_valid_move(from, to, self) {
                    continue;
                }

                let plan = MovePlan::classify(piece, from, to, self);
                let probe = self.apply_probe(plan);
                let escapes = !self.is_in_check(color);
                self.undo_probe(probe);

                if escapes {
                    debug!("[CHECK] {} escapes check with {} -> {}", color, from, to);
                    return false;
                }
            }
        }

        info!("[CHECK] {} is checkmated", color);
        true
    }
}
