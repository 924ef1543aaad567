//! ANSI escape sequence scanning.
//!
//! Detects escape sequences embedded in text so they can be passed through
//! untouched while the visible characters around them are measured and
//! cropped. Handles:
//! - CSI sequences: `ESC [` (or the 8-bit `0x9B` introducer) ... final byte
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (`ESC \`)
//! - Save and restore cursor: `ESC 7` / `ESC 8`, matched on their own so
//!   the character after them stays visible
//!
//! Every consumer goes through the single matcher returned by [`matcher`],
//! so a sequence is recognised identically when it is extracted and when it
//! is tokenized for cropping.

pub mod codes;

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

const ANSI_PATTERN: &str = concat!(
    r"\x1B[78]|",
    r"[\x1B\x{9B}][\[\]()#;?]*(?:",
    r"(?:(?:[a-zA-Z0-9]*(?:;[-a-zA-Z0-9/#&.:=?%@~_]*)*)?(?:\x07|\x1B\\))",
    r"|",
    r"(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PR-TZcf-ntqry=><~])",
    r")"
);

/// The shared, lazily compiled escape sequence matcher.
pub fn matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is a valid regex"))
}

/// The tail of a text chunk that may still grow into a longer sequence:
/// a lone ESC, a CSI still collecting parameters, or an OSC without its
/// terminator.
const PARTIAL_PATTERN: &str = concat!(
    r"(?:[\x1B\x{9B}](?:[\[\]()#;?]+[0-9;]*)?",
    r"|\x1B\][^\x07\x1B\x{FFFD}]*\x1B?)\z"
);

fn partial_matcher() -> &'static Regex {
    static MATCHER: OnceLock<Regex> = OnceLock::new();
    MATCHER.get_or_init(|| Regex::new(PARTIAL_PATTERN).expect("partial pattern is a valid regex"))
}

/// A unit of text that cropping never splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete escape sequence.
    Escape(&'a str),
    /// A single visible (or control) character.
    Char(char),
}

impl Token<'_> {
    /// Whether this token is an escape sequence.
    pub fn is_escape(&self) -> bool {
        matches!(self, Token::Escape(_))
    }

    /// Append the token's text to `buf`.
    pub fn push_to(&self, buf: &mut String) {
        match self {
            Token::Escape(seq) => buf.push_str(seq),
            Token::Char(c) => buf.push(*c),
        }
    }
}

/// Whether `s` contains anything that could start an escape sequence.
#[inline]
fn may_contain_escape(s: &str) -> bool {
    s.contains(['\x1b', '\u{9b}'])
}

/// Concatenate every escape sequence in `s`, in order, dropping everything else.
///
/// Used to keep style resets and cursor commands flowing while visible
/// output is suppressed.
pub fn extract_all(s: &str) -> String {
    if !may_contain_escape(s) {
        return String::new();
    }
    matcher().find_iter(s).map(|m| m.as_str()).collect()
}

/// Split `s` into escape-atomic tokens.
///
/// Each matched escape sequence becomes exactly one [`Token::Escape`];
/// every other character becomes its own [`Token::Char`].
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(s.len());
    if !may_contain_escape(s) {
        tokens.extend(s.chars().map(Token::Char));
        return tokens;
    }

    let mut last = 0;
    for m in matcher().find_iter(s) {
        tokens.extend(s[last..m.start()].chars().map(Token::Char));
        tokens.push(Token::Escape(m.as_str()));
        last = m.end();
    }
    tokens.extend(s[last..].chars().map(Token::Char));
    tokens
}

/// Byte offset where a possibly unfinished escape sequence at the end of
/// `s` starts, or `s.len()` if `s` does not end inside one.
///
/// A parameter digit is also a valid final byte, so `ESC [3` is reported
/// as unfinished even though the matcher accepts it.
pub fn unterminated_start(s: &str) -> usize {
    if !may_contain_escape(s) {
        return s.len();
    }
    partial_matcher().find(s).map_or(s.len(), |m| m.start())
}

/// Remove every escape sequence from `s`.
///
/// Returns `Cow::Borrowed` when there is nothing to remove.
pub fn strip(s: &str) -> Cow<'_, str> {
    if !may_contain_escape(s) {
        return Cow::Borrowed(s);
    }
    matcher().replace_all(s, "")
}
