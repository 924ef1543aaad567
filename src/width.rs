//! Display width of characters in terminal columns.
//!
//! - `0` for control characters and zero-width combining marks
//! - `1` for normal-width characters
//! - `2` for East Asian wide and full-width characters

use unicode_width::UnicodeWidthChar;

use crate::ansi::{self, Token};

/// Columns occupied by a single character.
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Columns occupied by a token; escape sequences take none.
#[inline]
pub fn token_width(token: &Token<'_>) -> usize {
    match token {
        Token::Escape(_) => 0,
        Token::Char(c) => char_width(*c),
    }
}

/// Columns occupied by a string, ignoring embedded escape sequences.
pub fn str_width(s: &str) -> usize {
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }
    ansi::strip(s).chars().map(char_width).sum()
}
