//! Text style vocabulary.
//!
//! Named 8-color foreground/background colors and their bright variants,
//! bold/italic/underline, and 24-bit RGB colors. Styles can be parsed from
//! the camelCase names used on the command line (`bold`, `brightRed`,
//! `bgBlue`, `#ff8800`, `bg:#102030`).

use std::fmt;
use std::str::FromStr;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Bright black
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit color
    Rgb(u8, u8, u8),
}

/// A single text style applied by [`crate::Renderer::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Fg(Color),
    Bg(Color),
}

/// Error returned when a style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown text style: '{0}'")]
pub struct StyleParseError(pub String);

impl FromStr for Color {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" => Color::Gray,
            "brightRed" => Color::BrightRed,
            "brightGreen" => Color::BrightGreen,
            "brightYellow" => Color::BrightYellow,
            "brightBlue" => Color::BrightBlue,
            "brightMagenta" => Color::BrightMagenta,
            "brightCyan" => Color::BrightCyan,
            "brightWhite" => Color::BrightWhite,
            hex if hex.starts_with('#') => {
                parse_hex(&hex[1..]).ok_or_else(|| StyleParseError(s.to_string()))?
            }
            _ => return Err(StyleParseError(s.to_string())),
        };
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Lowercase the first character of a camelCase remainder (`BrightRed` -> `brightRed`).
fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl FromStr for TextStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => return Ok(TextStyle::Bold),
            "italic" => return Ok(TextStyle::Italic),
            "underline" => return Ok(TextStyle::Underline),
            _ => {}
        }
        if let Some(hex) = s.strip_prefix("bg:") {
            return hex
                .parse()
                .map(TextStyle::Bg)
                .map_err(|_| StyleParseError(s.to_string()));
        }
        if let Some(rest) = s.strip_prefix("bg") {
            if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
                return decapitalize(rest)
                    .parse()
                    .map(TextStyle::Bg)
                    .map_err(|_| StyleParseError(s.to_string()));
            }
        }
        s.parse().map(TextStyle::Fg)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::BrightRed => "brightRed",
            Color::BrightGreen => "brightGreen",
            Color::BrightYellow => "brightYellow",
            Color::BrightBlue => "brightBlue",
            Color::BrightMagenta => "brightMagenta",
            Color::BrightCyan => "brightCyan",
            Color::BrightWhite => "brightWhite",
            Color::Rgb(r, g, b) => return write!(f, "#{r:02x}{g:02x}{b:02x}"),
        };
        f.write_str(name)
    }
}
