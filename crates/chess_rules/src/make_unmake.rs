//! Move making and unmaking for probes
//!
//! The checkmate search and the own-king safety check both need to try a move,
//! look at the board, and put everything back. A [`ReversibleMove`] records the
//! prior contents of every cell it changes; undoing replays those saves in
//! reverse, so the board ends up exactly as it was.
//!
//! Probes only touch the grid. The en-passant target, the touched-square mask
//! and any pending promotion are left alone.

use smallvec::SmallVec;

use crate::board::Board;
use crate::rules::{king, pawn, CastlingSide};
use crate::types::{Piece, PieceKind, Square};

/// What a validated move does to the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePlan {
    /// Relocate one piece, capturing whatever stands on `to`
    Normal { from: Square, to: Square },
    /// King two files sideways, then the rook to the square it crossed
    Castle {
        from: Square,
        to: Square,
        side: CastlingSide,
    },
    /// Pawn onto the en-passant target, removing the pawn beside it
    EnPassant {
        from: Square,
        to: Square,
        captured: Square,
    },
}

impl MovePlan {
    /// Decide how a move that already passed [`Piece::is_valid_move`] is carried out
    pub fn classify(piece: Piece, from: Square, to: Square, board: &Board) -> Self {
        match piece.kind {
            PieceKind::King if king::is_castling_shape(from, to) => MovePlan::Castle {
                from,
                to,
                side: CastlingSide::of_move(from, to),
            },
            PieceKind::Pawn
                if board.is_empty(to) && pawn::is_en_passant_capture(piece.color, from, to, board) =>
            {
                MovePlan::EnPassant {
                    from,
                    to,
                    captured: pawn::en_passant_victim(from, to),
                }
            }
            _ => MovePlan::Normal { from, to },
        }
    }

    pub fn from(&self) -> Square {
        match *self {
            MovePlan::Normal { from, .. }
            | MovePlan::Castle { from, .. }
            | MovePlan::EnPassant { from, .. } => from,
        }
    }

    pub fn to(&self) -> Square {
        match *self {
            MovePlan::Normal { to, .. }
            | MovePlan::Castle { to, .. }
            | MovePlan::EnPassant { to, .. } => to,
        }
    }
}

/// Saved cell contents needed to undo a probe
///
/// Four slots cover the largest plan: castling saves king and rook squares.
#[derive(Debug, Default)]
#[must_use = "an applied probe must be undone"]
pub struct ReversibleMove {
    saved: SmallVec<[(Square, Option<Piece>); 4]>,
}

impl ReversibleMove {
    fn save(&mut self, board: &Board, square: Square) {
        self.saved.push((square, board.get_piece(square)));
    }

    fn relocate(&mut self, board: &mut Board, from: Square, to: Square) {
        self.save(board, from);
        self.save(board, to);
        let piece = board.take_cell(from);
        board.set_cell(to, piece);
    }

    fn clear(&mut self, board: &mut Board, square: Square) {
        self.save(board, square);
        board.set_cell(square, None);
    }
}

impl Board {
    /// Apply `plan` to the grid only, returning what is needed to undo it
    pub fn apply_probe(&mut self, plan: MovePlan) -> ReversibleMove {
        let mut probe = ReversibleMove::default();
        match plan {
            MovePlan::Normal { from, to } => probe.relocate(self, from, to),
            MovePlan::Castle { from, to, side } => {
                probe.relocate(self, from, to);
                if let Some(rook_to) = side.rook_destination(to) {
                    probe.relocate(self, side.rook_corner(from), rook_to);
                }
            }
            MovePlan::EnPassant { from, to, captured } => {
                probe.relocate(self, from, to);
                probe.clear(self, captured);
            }
        }
        probe
    }

    /// Restore every cell a probe changed
    pub fn undo_probe(&mut self, probe: ReversibleMove) {
        for (square, piece) in probe.saved.into_iter().rev() {
            self.set_cell(square, piece);
        }
    }
}
