//! Position translation between algebraic notation and board squares
//!
//! A square is written as a file letter `a`-`h` followed by a rank digit
//! `1`-`8`. The rank digit counts from White's side, while the board's rank
//! index counts from the top, so `rank index = 8 - digit` and
//! `file index = letter - 'a'`.
//!
//! Moves are two squares: `"e2 e4"`, `"e2-e4"` or `"e2e4"`.

use std::str::FromStr;

use crate::constants::BOARD_SIZE;
use crate::error::{RulesError, RulesResult};
use crate::types::Square;

/// Parse a two-character square such as `"e4"`
///
/// # Errors
///
/// [`RulesError::InvalidSquare`] unless the text is exactly a file letter
/// followed by a rank digit. Upper-case file letters are accepted.
pub fn parse_square(text: &str) -> RulesResult<Square> {
    let invalid = || RulesError::InvalidSquare {
        notation: text.to_string(),
    };

    let mut chars = text.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
        _ => return Err(invalid()),
    };

    if !('a'..='h').contains(&file) {
        return Err(invalid());
    }
    let digit = rank.to_digit(10).filter(|d| (1..=8).contains(d)).ok_or_else(invalid)?;

    Square::new(BOARD_SIZE as u8 - digit as u8, file as u8 - b'a')
}

/// Parse a move made of two squares
///
/// # Errors
///
/// [`RulesError::MalformedMove`] if the text does not split into exactly two
/// squares, or [`RulesError::InvalidSquare`] if either square is bad.
pub fn parse_move(input: &str) -> RulesResult<(Square, Square)> {
    let malformed = || RulesError::MalformedMove {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let parts: Vec<&str> = if trimmed.contains('-') {
        trimmed.split('-').map(str::trim).collect()
    } else {
        trimmed.split_whitespace().collect()
    };

    let (start, end) = match parts.as_slice() {
        [start, end] => (*start, *end),
        [compact] if compact.len() == 4 && compact.is_ascii() => compact.split_at(2),
        _ => return Err(malformed()),
    };

    Ok((parse_square(start)?, parse_square(end)?))
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}
