//! # Chess Rules Engine
//!
//! Board state and move legality for standard chess: the six movement
//! grammars, castling, en passant, pawn promotion, check and checkmate.
//!
//! ## Module Organization
//!
//! - `types` - [`Color`], [`PieceKind`], [`Piece`], [`Square`]
//! - `rules` - per-piece movement predicates and attack geometry
//! - `board` - the grid, en-passant and promotion state, check queries
//! - `make_unmake` - reversible probes used by the check searches
//! - `promotion` - promotion choices and the prompt hook
//! - `notation` - `"e2"` style squares and `"e2 e4"` style moves
//! - `game` - turn ownership and move orchestration
//!
//! ## Example
//!
//! ```
//! use chess_rules::{Color, Game};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("e2 e4"));
//! assert_eq!(game.current_turn(), Color::Black);
//!
//! // Not White's turn any more
//! assert!(!game.make_move("d2 d4"));
//! ```
//!
//! Not covered: stalemate, repetition, the fifty-move rule and insufficient
//! material.

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod make_unmake;
pub mod notation;
pub mod promotion;
pub mod rules;
pub mod types;

pub use board::{Board, MoveEffect};
pub use error::{RulesError, RulesResult};
pub use game::{Game, GameStatus, MoveKind, MoveRecord};
pub use make_unmake::{MovePlan, ReversibleMove};
pub use notation::{parse_move, parse_square};
pub use promotion::{PendingPromotion, PromotionChoice, PromotionPrompt};
pub use rules::CastlingSide;
pub use types::{Color, Piece, PieceKind, Square};
