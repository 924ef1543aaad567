//! Escape sequence generation.
//!
//! Translates symbolic cursor, erase and style requests into the exact
//! bytes a terminal expects. Cursor and erase commands come from crossterm's
//! command types; SGR style codes are written directly.

use std::fmt::Write as _;

use crossterm::cursor::{Hide, MoveDown, MoveLeft, MoveRight, MoveUp, Show};
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

use crate::style::{Color, TextStyle};

/// Erase from the cursor to the end of the line.
pub const ERASE_FORWARD: &str = "\x1b[K";
/// Erase from the start of the line to the cursor.
pub const ERASE_BACKWARD: &str = "\x1b[1K";
/// Erase the whole line.
pub const ERASE_LINE: &str = "\x1b[2K";
/// Erase from the cursor to the end of the screen.
pub const ERASE_DOWN: &str = "\x1b[J";
/// Erase from the start of the screen to the cursor.
pub const ERASE_UP: &str = "\x1b[1J";
/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Terminal bell.
pub const BEEP: &str = "\x07";
/// Reset all SGR attributes.
pub const STYLE_RESET: &str = "\x1b[0m";

/// Render a crossterm command as its ANSI text.
fn ansi(command: impl Command) -> String {
    let mut buf = String::new();
    // Formatting into a String cannot fail.
    let _ = command.write_ansi(&mut buf);
    buf
}

/// Largest count in one move sequence; the scanner reads at most four
/// parameter digits, so longer moves are split.
const MAX_MOVE: u64 = 9999;

fn push_move<C: Command>(seq: &mut String, n: i64, command: fn(u16) -> C) {
    let mut remaining = n.unsigned_abs();
    while remaining > 0 {
        let step = remaining.min(MAX_MOVE);
        seq.push_str(&ansi(command(step as u16)));
        remaining -= step;
    }
}

/// Relative cursor movement, horizontal first.
///
/// A zero delta produces an empty string.
pub fn cursor_move(dx: i64, dy: i64) -> String {
    let mut seq = String::new();
    if dx < 0 {
        push_move(&mut seq, dx, MoveLeft);
    } else {
        push_move(&mut seq, dx, MoveRight);
    }
    if dy < 0 {
        push_move(&mut seq, dy, MoveUp);
    } else {
        push_move(&mut seq, dy, MoveDown);
    }
    seq
}

/// Erase sequences, one per erase operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Erase {
    Forward,
    Backward,
    Line,
    Down,
    Up,
}

impl Erase {
    /// The escape sequence for this erase operation.
    pub fn sequence(self) -> String {
        match self {
            Erase::Forward => ansi(Clear(ClearType::UntilNewLine)),
            // crossterm has no "erase to start of line" clear type
            Erase::Backward => ERASE_BACKWARD.to_string(),
            Erase::Line => ansi(Clear(ClearType::CurrentLine)),
            Erase::Down => ansi(Clear(ClearType::FromCursorDown)),
            Erase::Up => ansi(Clear(ClearType::FromCursorUp)),
        }
    }
}

/// Cursor visibility sequence.
pub fn cursor_visibility(visible: bool) -> String {
    if visible {
        ansi(Show)
    } else {
        ansi(Hide)
    }
}

fn push_sgr(buf: &mut String, code: u8) {
    let _ = write!(buf, "\x1b[{code}m");
}

fn push_rgb(buf: &mut String, base: u8, r: u8, g: u8, b: u8) {
    let _ = write!(buf, "\x1b[{base};2;{r};{g};{b}m");
}

/// Offset of a named color from its 30/40 (normal) or 90/100 (bright) base.
fn color_offset(color: Color) -> Option<(u8, bool)> {
    let entry = match color {
        Color::Black => (0, false),
        Color::Red => (1, false),
        Color::Green => (2, false),
        Color::Yellow => (3, false),
        Color::Blue => (4, false),
        Color::Magenta => (5, false),
        Color::Cyan => (6, false),
        Color::White => (7, false),
        Color::Gray => (0, true),
        Color::BrightRed => (1, true),
        Color::BrightGreen => (2, true),
        Color::BrightYellow => (3, true),
        Color::BrightBlue => (4, true),
        Color::BrightMagenta => (5, true),
        Color::BrightCyan => (6, true),
        Color::BrightWhite => (7, true),
        Color::Rgb(..) => return None,
    };
    Some(entry)
}

fn push_color(buf: &mut String, color: Color, background: bool) {
    if let Color::Rgb(r, g, b) = color {
        push_rgb(buf, if background { 48 } else { 38 }, r, g, b);
        return;
    }
    if let Some((offset, bright)) = color_offset(color) {
        let base = match (background, bright) {
            (false, false) => 30,
            (true, false) => 40,
            (false, true) => 90,
            (true, true) => 100,
        };
        push_sgr(buf, base + offset);
    }
}

/// Append the start sequence for `style` to `buf`.
pub fn push_style(style: &TextStyle, buf: &mut String) {
    match style {
        TextStyle::Bold => push_sgr(buf, 1),
        TextStyle::Italic => push_sgr(buf, 3),
        TextStyle::Underline => push_sgr(buf, 4),
        TextStyle::Fg(color) => push_color(buf, *color, false),
        TextStyle::Bg(color) => push_color(buf, *color, true),
    }
}

/// Concatenated start sequences for `styles`, in order.
pub fn style_start(styles: &[TextStyle]) -> String {
    let mut buf = String::new();
    for style in styles {
        push_style(style, &mut buf);
    }
    buf
}
