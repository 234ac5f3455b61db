//! # Core Types - Colors, Pieces and Squares
//!
//! ## Overview
//!
//! The rules engine works on an 8x8 grid addressed by `(rank, file)` index pairs:
//!
//! - **rank** 0-7, top to bottom (rank index 0 is the eighth rank, where Black's
//!   pieces start; rank index 7 is the first rank, where White's pieces start)
//! - **file** 0-7, left to right (file index 0 is the `a` file)
//!
//! so `e2` is `Square { rank: 6, file: 4 }` and `e7` is `Square { rank: 1, file: 4 }`.
//! White advances toward decreasing rank indices, Black toward increasing ones.
//!
//! ## Pieces as a Closed Enum
//!
//! A [`Piece`] is a [`PieceKind`] tag plus a [`Color`]. Every movement query
//! dispatches with an exhaustive `match` on the kind (see [`crate::rules`]), so
//! adding a kind without teaching every rule about it is a compile error.
//!
//! Pieces are plain `Copy` values. A board cell either owns one or is empty;
//! promotion replaces the cell's occupant with a new piece of the same color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

use crate::constants::BOARD_SIZE;
use crate::error::{RulesError, RulesResult};

/// Side a piece belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank delta of a single pawn step for this color
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank index of this color's back rank
    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank index this color's pawns start on
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A piece on the board: its kind and the side it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(PieceKind::Pawn, color)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(PieceKind::Rook, color)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(PieceKind::Knight, color)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(PieceKind::Bishop, color)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(PieceKind::Queen, color)
    }

    pub const fn king(color: Color) -> Self {
        Self::new(PieceKind::King, color)
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Unicode chess glyph for this piece
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// A board coordinate: rank index 0-7 (top to bottom) and file index 0-7 (left to right)
///
/// Squares can only be built through checked constructors, so every `Square`
/// in circulation addresses a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    rank: u8,
    file: u8,
}

/// Unchecked wire form of a [`Square`]; deserialization goes through [`Square::new`]
#[derive(Deserialize)]
struct RawSquare {
    rank: u8,
    file: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = RulesError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.rank, raw.file)
    }
}

impl Square {
    /// Build a square from rank and file indices
    ///
    /// # Errors
    ///
    /// [`RulesError::SquareOutOfRange`] if either index is outside 0-7.
    pub fn new(rank: u8, file: u8) -> RulesResult<Self> {
        if (rank as usize) < BOARD_SIZE && (file as usize) < BOARD_SIZE {
            Ok(Self { rank, file })
        } else {
            Err(RulesError::SquareOutOfRange { rank, file })
        }
    }

    /// Only for indices already known to be on the board
    pub(crate) const fn new_unchecked(rank: u8, file: u8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file(&self) -> u8 {
        self.file
    }

    /// Linear index 0-63, row-major from the top-left corner
    #[inline]
    pub fn index(&self) -> usize {
        self.rank as usize * BOARD_SIZE + self.file as usize
    }

    /// The square `dr` ranks and `df` files away, if it is still on the board
    pub fn offset(&self, dr: i8, df: i8) -> Option<Square> {
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if (0..BOARD_SIZE as i8).contains(&rank) && (0..BOARD_SIZE as i8).contains(&file) {
            Some(Square::new_unchecked(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Signed `(rank, file)` distance from `self` to `other`
    #[inline]
    pub fn delta_to(&self, other: Square) -> (i8, i8) {
        (
            other.rank as i8 - self.rank as i8,
            other.file as i8 - self.file as i8,
        )
    }

    /// All 64 squares, row by row from the top-left corner
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|rank| (0..BOARD_SIZE as u8).map(move |file| Square::new_unchecked(rank, file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            BOARD_SIZE as u8 - self.rank
        )
    }
}
