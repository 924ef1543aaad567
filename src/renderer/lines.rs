//! Width- and height-aware line cropping.
//!
//! Splits text on the line separator, crops each line to the columns left
//! in the window and drops lines that would land below the last row.
//! Escape sequences are kept whole and cost no columns, so a style reset
//! after the cut still reaches the terminal.

use crate::ansi;
use crate::width::{str_width, token_width};

use super::position::{to_i64, Position, Window};

/// Line separator used for splitting and joining.
pub const LINE_SEPARATOR: char = '\n';

/// Result of cropping a chunk of text against the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cropped {
    /// The visible part of the text, escape sequences included.
    pub text: String,
    /// Cursor position after writing `text`.
    ///
    /// The row counts every input line, including dropped ones, so a write
    /// running past the bottom of the window is detectable as overflow.
    pub position: Position,
}

/// Keep the tokens of `line` that fit in `budget` columns.
///
/// Visible characters stop at the first one that does not fit; escape
/// sequences anywhere in the line are kept.
pub fn crop_line(line: &str, budget: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut full = false;

    for token in ansi::tokenize(line) {
        if token.is_escape() {
            token.push_to(&mut out);
            continue;
        }
        if full {
            continue;
        }
        let w = token_width(&token);
        if used + w > budget {
            full = true;
            continue;
        }
        used += w;
        token.push_to(&mut out);
    }
    out
}

/// Crop `lines` written starting at `start` to fit `window`.
pub fn crop_lines<S: AsRef<str>>(lines: &[S], start: Position, window: Window) -> Vec<String> {
    let max_y = window.max_y();
    let first_budget = usize::try_from(start.x)
        .map(|x| window.width.saturating_sub(x))
        .unwrap_or(window.width);

    let mut cropped = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if start.y.saturating_add(to_i64(i)) > max_y {
            break;
        }
        let budget = if i == 0 { first_budget } else { window.width };
        cropped.push(crop_line(line.as_ref(), budget));
    }
    cropped
}

/// Cursor position after writing `lines` starting at `start`.
pub fn calc_position<S: AsRef<str>>(lines: &[S], start: Position) -> Position {
    let last_width = lines.last().map_or(0, |l| to_i64(str_width(l.as_ref())));
    let x = if lines.len() > 1 { 0 } else { start.x } + last_width;
    let y = start.y + to_i64(lines.len().saturating_sub(1));
    Position::new(x, y)
}

/// Crop `text` written at `start` and compute the resulting position.
///
/// The column comes from the cropped output; the row from the uncropped
/// line count. Escape sequences from lines dropped below the window are
/// appended to the output so styles opened above the edge still get reset.
pub fn process(text: &str, start: Position, window: Window) -> Cropped {
    let lines: Vec<&str> = text.split(LINE_SEPARATOR).collect();
    let cropped = crop_lines(&lines, start, window);
    let origin = calc_position(&lines, start);
    let visible = calc_position(&cropped, start);

    let mut out = String::with_capacity(text.len());
    for (i, line) in cropped.iter().enumerate() {
        if i > 0 {
            out.push(LINE_SEPARATOR);
        }
        out.push_str(line);
    }
    for dropped in &lines[cropped.len()..] {
        out.push_str(&ansi::extract_all(dropped));
    }

    Cropped {
        text: out,
        position: Position::new(visible.x, origin.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Window = Window {
        width: 10,
        height: 5,
    };

    #[test]
    fn crop_line_fits() {
        assert_eq!(crop_line("hello", 10), "hello");
    }

    #[test]
    fn crop_line_truncates_to_budget() {
        assert_eq!(crop_line("hello world", 5), "hello");
        assert_eq!(crop_line("hello", 0), "");
    }

    #[test]
    fn crop_line_never_splits_wide_char() {
        // "你" needs 2 columns, only 1 left after "ab" in a budget of 3
        assert_eq!(crop_line("ab你c", 3), "ab");
    }

    #[test]
    fn crop_line_keeps_escapes_past_cut() {
        let line = "abc\x1b[31mdef\x1b[0m";
        assert_eq!(crop_line(line, 2), "ab\x1b[31m\x1b[0m");
    }

    #[test]
    fn crop_line_keeps_escape_at_boundary_whole() {
        let line = "ab\x1b[38;2;1;2;3mcd";
        assert_eq!(crop_line(line, 2), "ab\x1b[38;2;1;2;3m");
    }

    #[test]
    fn crop_lines_first_line_uses_remaining_columns() {
        let cropped = crop_lines(&["abcdef", "abcdefghijkl"], Position::new(7, 0), WINDOW);
        assert_eq!(cropped, vec!["abc", "abcdefghij"]);
    }

    #[test]
    fn crop_lines_drops_rows_below_window() {
        let cropped = crop_lines(&["a", "b", "c", "d"], Position::new(0, 3), WINDOW);
        assert_eq!(cropped, vec!["a", "b"]);
    }

    #[test]
    fn crop_lines_at_pending_wrap_column() {
        let cropped = crop_lines(&["xyz"], Position::new(10, 0), WINDOW);
        assert_eq!(cropped, vec![""]);
    }

    #[test]
    fn calc_position_single_line_adds_to_x() {
        assert_eq!(calc_position(&["abc"], Position::new(2, 1)), Position::new(5, 1));
    }

    #[test]
    fn calc_position_multi_line_restarts_x() {
        assert_eq!(
            calc_position(&["abc", "de", "你"], Position::new(2, 1)),
            Position::new(2, 3)
        );
    }

    #[test]
    fn calc_position_ignores_escapes() {
        assert_eq!(
            calc_position(&["\x1b[1mab\x1b[0m"], Position::ORIGIN),
            Position::new(2, 0)
        );
    }

    #[test]
    fn process_empty_is_identity() {
        let start = Position::new(4, 2);
        let result = process("", start, WINDOW);
        assert_eq!(result.text, "");
        assert_eq!(result.position, start);
    }

    #[test]
    fn process_crops_and_reports_visible_x() {
        let result = process("abcdefghijklmnop", Position::ORIGIN, WINDOW);
        assert_eq!(result.text, "abcdefghij");
        assert_eq!(result.position, Position::new(10, 0));
    }

    #[test]
    fn process_row_counts_dropped_lines() {
        let result = process("a\nb\nc\nd", Position::new(0, 3), WINDOW);
        assert_eq!(result.text, "a\nb");
        assert_eq!(result.position, Position::new(1, 6));
    }

    #[test]
    fn process_keeps_escapes_of_dropped_lines() {
        let result = process("\x1b[31ma\nb\x1b[0m", Position::new(0, 4), WINDOW);
        assert_eq!(result.text, "\x1b[31ma\x1b[0m");
        assert_eq!(result.position, Position::new(1, 5));
    }

    #[test]
    fn process_newlines_only() {
        let result = process("\n\n", Position::new(3, 0), WINDOW);
        assert_eq!(result.text, "\n\n");
        assert_eq!(result.position, Position::new(0, 2));
    }
}
