//! Game controller - turn ownership and move orchestration
//!
//! [`Game`] owns the [`Board`] and whose turn it is. A move attempt runs to
//! completion before the next one is accepted:
//!
//! 1. the moving piece must exist and belong to the side to move
//! 2. its movement rule must allow the move ([`Piece::is_valid_move`])
//! 3. the move is tried as a reversible probe and rejected if it leaves the
//!    mover's own king in check
//! 4. it is carried out by shape: castling moves king then rook, en passant
//!    moves the pawn then removes the captured one, anything else is a plain
//!    [`Board::move_piece`]
//! 5. the turn passes to the other side
//!
//! A rejected attempt changes nothing, not even the turn.
//!
//! # Promotion
//!
//! A pawn reaching the last rank leaves the game waiting for
//! [`Game::complete_promotion`]. The turn has already passed, but no further
//! move is accepted until the pawn is replaced. [`Game::play`] does both steps
//! in one call with a [`PromotionPrompt`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, MoveEffect};
use crate::error::{RulesError, RulesResult};
use crate::make_unmake::MovePlan;
use crate::notation::parse_move;
use crate::promotion::{PendingPromotion, PromotionChoice, PromotionPrompt};
use crate::rules::CastlingSide;
use crate::types::{Color, Piece, PieceKind, Square};

/// How a move was carried out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    Castle(CastlingSide),
    EnPassant,
}

/// One applied move, as kept in the game history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// Filled in once a promotion on this move is completed
    pub promoted_to: Option<PieceKind>,
}

/// Where the side to move stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_turn: Color,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Continue from an arbitrary position
    pub fn from_board(board: Board, current_turn: Color) -> Self {
        Self {
            board,
            current_turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Every move applied so far, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.board.pending_promotion()
    }

    /// Validate and apply a move for the side to move
    ///
    /// # Errors
    ///
    /// - [`RulesError::PromotionPending`] while a pawn waits for its piece
    /// - [`RulesError::NoPieceAtSquare`] / [`RulesError::WrongTurn`] for a bad source square
    /// - [`RulesError::IllegalMove`] if the piece cannot move that way
    /// - [`RulesError::LeavesKingInCheck`] if the mover's king would be attacked afterwards
    pub fn try_move(&mut self, from: Square, to: Square) -> RulesResult<MoveRecord> {
        if let Some(pending) = self.board.pending_promotion() {
            return Err(RulesError::PromotionPending {
                square: pending.square,
            });
        }

        let piece = self
            .board
            .get_piece(from)
            .ok_or(RulesError::NoPieceAtSquare { square: from })?;

        if piece.color != self.current_turn {
            return Err(RulesError::WrongTurn {
                square: from,
                color: self.current_turn,
            });
        }

        if !piece.is_valid_move(from, to, &self.board) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let plan = MovePlan::classify(piece, from, to, &self.board);

        let probe = self.board.apply_probe(plan);
        let exposed = self.board.is_in_check(piece.color);
        self.board.undo_probe(probe);
        if exposed {
            return Err(RulesError::LeavesKingInCheck { from, to });
        }

        let record = self.execute(piece, plan)?;

        self.current_turn = !self.current_turn;
        self.history.push(record.clone());
        Ok(record)
    }

    fn execute(&mut self, piece: Piece, plan: MovePlan) -> RulesResult<MoveRecord> {
        let (from, to) = (plan.from(), plan.to());

        let (captured, kind) = match plan {
            MovePlan::Normal { .. } => {
                let effect = self.board.move_piece(from, to)?;
                if let MoveEffect::PromotionPending { square, .. } = effect {
                    debug!("[MOVE] {} waits for promotion on {}", piece.color, square);
                }
                (effect.captured(), MoveKind::Normal)
            }
            MovePlan::Castle { side, .. } => {
                let rook_from = side.rook_corner(from);
                let rook_to = side
                    .rook_destination(to)
                    .ok_or(RulesError::IllegalMove { from, to })?;
                self.board.move_piece(from, to)?;
                self.board.move_piece(rook_from, rook_to)?;
                debug!(
                    "[CASTLE] {} castles {:?}: king {} -> {}, rook {} -> {}",
                    piece.color, side, from, to, rook_from, rook_to
                );
                (None, MoveKind::Castle(side))
            }
            MovePlan::EnPassant {
                captured: victim, ..
            } => {
                self.board.move_piece(from, to)?;
                let taken = self.board.remove_piece(victim);
                debug!(
                    "[EN_PASSANT] {} pawn {} -> {} takes on {}",
                    piece.color, from, to, victim
                );
                (taken, MoveKind::EnPassant)
            }
        };

        debug!(
            "[MOVE] {} {:?} {} -> {}{}",
            piece.color,
            piece.kind,
            from,
            to,
            if captured.is_some() { " (capture)" } else { "" }
        );

        Ok(MoveRecord {
            piece,
            from,
            to,
            captured,
            kind,
            promoted_to: None,
        })
    }

    /// Apply a move written as two squares (`"e2 e4"`)
    ///
    /// Every failure, including unreadable input, comes back as `false` with the
    /// turn unchanged. A promotion reached by this move is left pending.
    pub fn make_move(&mut self, input: &str) -> bool {
        match parse_move(input).and_then(|(from, to)| self.try_move(from, to)) {
            Ok(_) => true,
            Err(err) => {
                debug!("[MOVE] Rejected {:?}: {}", input, err);
                false
            }
        }
    }

    /// Like [`Game::make_move`], asking `prompt` for the piece if the move promotes a pawn
    pub fn play(&mut self, input: &str, prompt: &mut impl PromotionPrompt) -> bool {
        if !self.make_move(input) {
            return false;
        }
        if let Some(pending) = self.board.pending_promotion() {
            let choice = prompt.choose(pending);
            if let Err(err) = self.complete_promotion(choice) {
                debug!("[PROMOTION] {}", err);
            }
        }
        true
    }

    /// Replace the waiting pawn with the chosen piece
    ///
    /// # Errors
    ///
    /// [`RulesError::NoPendingPromotion`] if no pawn is waiting.
    pub fn complete_promotion(&mut self, choice: PromotionChoice) -> RulesResult<Piece> {
        let promoted = self.board.complete_promotion(choice)?;
        if let Some(last) = self.history.last_mut() {
            last.promoted_to = Some(promoted.kind);
        }
        Ok(promoted)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    /// Check/checkmate status of the side to move
    pub fn status(&mut self) -> GameStatus {
        let color = self.current_turn;
        if !self.board.is_in_check(color) {
            GameStatus::Ongoing
        } else if self.board.is_checkmate(color) {
            info!("[CHECK] Game over, {} wins", !color);
            GameStatus::Checkmate
        } else {
            GameStatus::Check
        }
    }
}
