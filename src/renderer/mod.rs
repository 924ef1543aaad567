//! Position-aware rendering into a byte sink.
//!
//! [`Renderer`] wraps a [`Sink`] and tracks where the terminal cursor is
//! as text goes through it:
//! - writes are cropped to the columns and rows left in the window
//! - cursor moves are clamped to the window and translated to escape bytes
//! - once the tracked row leaves the window, visible text is suppressed and
//!   only escape sequences are forwarded until a move brings the row back
//!
//! Position state is updated eagerly on every call, before the sink sees
//! the bytes.
//!
//! Through [`io::Write`], a trailing incomplete UTF-8 character or escape
//! sequence is held back until the next buffer completes it, so a stream
//! renders the same however it is chunked.

pub mod lines;
pub mod position;

use std::io;

use tracing::{debug, trace};

use crate::ansi::{self, codes, codes::Erase};
use crate::config::{RendererOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::RenderError;
use crate::sink::Sink;
use crate::style::TextStyle;

pub use lines::LINE_SEPARATOR;
pub use position::{Overflow, Position, PositionTracker, Window};

/// Longest tail [`io::Write`] holds back waiting for the rest of a sequence.
const MAX_PENDING: usize = 256;

/// Terminal output decorator that crops writes to the visible window.
#[derive(Debug)]
pub struct Renderer<S: Sink> {
    sink: S,
    options: RendererOptions,
    tracker: PositionTracker,
    /// Unfinished tail of the last `io::Write` buffer.
    pending: Vec<u8>,
    ended: bool,
}

impl<S: Sink> Renderer<S> {
    /// Create a renderer that reads its window size from the sink.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, RendererOptions::default())
    }

    /// Create a renderer; fixed sizes in `options` override the sink's.
    pub fn with_options(sink: S, options: RendererOptions) -> Self {
        Self {
            sink,
            options,
            tracker: PositionTracker::new(),
            pending: Vec::new(),
            ended: false,
        }
    }

    // Accessors

    /// Cursor position, with the row one past the window edge while overflowing.
    pub fn position(&self) -> Position {
        self.tracker.reported()
    }

    /// Cursor position clamped into the window.
    pub fn cursor_position(&self) -> Position {
        self.tracker.current()
    }

    pub fn saved_position(&self) -> Position {
        self.tracker.saved()
    }

    pub fn overflow(&self) -> Overflow {
        self.tracker.overflow()
    }

    /// Visible columns: configured, else the sink's, else 80.
    pub fn width(&self) -> usize {
        self.options.fixed_width().unwrap_or_else(|| {
            let live = self.sink.columns().filter(|&c| c > 0);
            debug!(columns = ?live, "reading width from sink");
            live.unwrap_or(DEFAULT_WIDTH)
        })
    }

    /// Visible rows: configured, else the sink's, else 20.
    pub fn height(&self) -> usize {
        self.options.fixed_height().unwrap_or_else(|| {
            let live = self.sink.rows().filter(|&r| r > 0);
            debug!(rows = ?live, "reading height from sink");
            live.unwrap_or(DEFAULT_HEIGHT)
        })
    }

    /// Fix the width, or pass `None` to follow the sink again.
    pub fn set_width(&mut self, width: Option<i32>) {
        self.options.width = width;
    }

    /// Fix the height, or pass `None` to follow the sink again.
    pub fn set_height(&mut self, height: Option<i32>) {
        self.options.height = height;
    }

    pub fn is_tty(&self) -> bool {
        self.sink.is_tty()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    fn window(&self) -> Window {
        Window::new(self.width(), self.height())
    }

    // Output

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.ended {
            return Err(RenderError::Ended);
        }
        Ok(())
    }

    /// Forward bytes to the sink; empty output never reaches it.
    fn emit(&mut self, out: &str) -> Result<(), RenderError> {
        if out.is_empty() {
            return Ok(());
        }
        self.sink.write(out.as_bytes())?;
        Ok(())
    }

    /// Crop `text` for the current state and advance the tracked position.
    fn render(&mut self, text: &str) -> String {
        let overflow = self.tracker.overflow();
        if overflow != Overflow::None {
            let passed = ansi::extract_all(text);
            debug!(
                ?overflow,
                dropped = text.len() - passed.len(),
                "suppressing visible output"
            );
            return passed;
        }

        let window = self.window();
        let cropped = lines::process(text, self.tracker.reported(), window);
        self.tracker.set_position(cropped.position, window);
        trace!(
            input = text.len(),
            output = cropped.text.len(),
            x = self.tracker.current().x,
            y = self.tracker.current().y,
            "rendered chunk"
        );
        if self.tracker.overflow() != Overflow::None {
            debug!(
                overflow = ?self.tracker.overflow(),
                requested_row = cropped.position.y,
                "cursor left the window"
            );
        }
        cropped.text
    }

    /// Write text, cropped to the window.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Sink`] if the sink rejects the bytes and
    /// [`RenderError::Ended`] after [`end`](Self::end).
    pub fn write(&mut self, text: &str) -> Result<&mut Self, RenderError> {
        self.ensure_open()?;
        let out = self.render(text);
        self.emit(&out)?;
        Ok(self)
    }

    /// Write raw bytes, decoding invalid UTF-8 leniently.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, RenderError> {
        self.write(&String::from_utf8_lossy(bytes))
    }

    /// Render an optional final chunk and end the sink.
    ///
    /// Bytes still held back by the [`io::Write`] adapter are rendered
    /// first, decoded leniently.
    pub fn end(&mut self, text: Option<&str>) -> Result<(), RenderError> {
        self.ensure_open()?;
        let mut last = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        if let Some(text) = text {
            last.push_str(text);
        }
        if !last.is_empty() {
            let out = self.render(&last);
            self.emit(&out)?;
        }
        self.ended = true;
        self.sink.end()?;
        Ok(())
    }

    // Cursor movement

    /// Move the cursor to column `x` and row `y` (current row if `None`).
    ///
    /// Targets are bounded to the addressable cells: the last column unless
    /// the cursor already sits past it after a full line, and the last row
    /// unless the cursor is already below the window.
    pub fn to(&mut self, x: i64, y: Option<i64>) -> Result<&mut Self, RenderError> {
        self.ensure_open()?;
        let window = self.window();
        let reported = self.position();

        let max_x = if reported.x >= window.max_x() {
            window.max_x()
        } else {
            window.max_x() - 1
        };
        let max_y = if reported.y > window.max_y() {
            window.max_y() + 1
        } else {
            window.max_y()
        };
        let dest = Position::new(
            x.clamp(0, max_x.max(0)),
            y.unwrap_or(reported.y).clamp(0, max_y.max(0)),
        );

        let source = self.tracker.current();
        let cursor = self.tracker.set_position(dest, window);
        let delta = cursor - source;
        self.write(&codes::cursor_move(delta.x, delta.y))
    }

    /// Move the cursor relative to its current position.
    pub fn move_by(&mut self, dx: i64, dy: i64) -> Result<&mut Self, RenderError> {
        let dest = self.position() + Position::new(dx, dy);
        self.to(dest.x, Some(dest.y))
    }

    pub fn save_position(&mut self) -> &mut Self {
        self.tracker.save(self.tracker.reported());
        self
    }

    pub fn restore_position(&mut self) -> Result<&mut Self, RenderError> {
        let saved = self.tracker.saved();
        self.to(saved.x, Some(saved.y))
    }

    pub fn reset_position(&mut self) -> Result<&mut Self, RenderError> {
        self.to(0, Some(0))
    }

    /// Return to the origin and erase everything below it.
    pub fn reset(&mut self) -> Result<&mut Self, RenderError> {
        self.reset_position()?;
        self.erase_down()
    }

    /// Write `n` line separators.
    pub fn new_line(&mut self, n: usize) -> Result<&mut Self, RenderError> {
        let separators: String = std::iter::repeat(LINE_SEPARATOR).take(n).collect();
        self.write(&separators)
    }

    /// Erase the current line and return to its first column.
    pub fn clear_line(&mut self) -> Result<&mut Self, RenderError> {
        self.erase_line()?;
        self.to(0, None)
    }

    // Fixed sequences. These never move the tracked cursor and are
    // forwarded in every state.

    fn passthrough(&mut self, seq: &str) -> Result<&mut Self, RenderError> {
        self.ensure_open()?;
        self.emit(seq)?;
        Ok(self)
    }

    fn erase(&mut self, erase: Erase) -> Result<&mut Self, RenderError> {
        self.passthrough(&erase.sequence())
    }

    pub fn erase_forward(&mut self) -> Result<&mut Self, RenderError> {
        self.erase(Erase::Forward)
    }

    pub fn erase_backward(&mut self) -> Result<&mut Self, RenderError> {
        self.erase(Erase::Backward)
    }

    pub fn erase_line(&mut self) -> Result<&mut Self, RenderError> {
        self.erase(Erase::Line)
    }

    pub fn erase_down(&mut self) -> Result<&mut Self, RenderError> {
        self.erase(Erase::Down)
    }

    pub fn erase_up(&mut self) -> Result<&mut Self, RenderError> {
        self.erase(Erase::Up)
    }

    pub fn beep(&mut self) -> Result<&mut Self, RenderError> {
        self.passthrough(codes::BEEP)
    }

    pub fn show_cursor(&mut self) -> Result<&mut Self, RenderError> {
        self.passthrough(&codes::cursor_visibility(true))
    }

    pub fn hide_cursor(&mut self) -> Result<&mut Self, RenderError> {
        self.passthrough(&codes::cursor_visibility(false))
    }

    /// Write `text` wrapped in `styles`, resetting afterwards if any applied.
    pub fn text(&mut self, text: &str, styles: &[TextStyle]) -> Result<&mut Self, RenderError> {
        let mut styled = codes::style_start(styles);
        styled.push_str(text);
        if !styles.is_empty() {
            styled.push_str(codes::STYLE_RESET);
        }
        self.write(&styled)
    }
}

/// Length of `bytes` without a trailing, incomplete UTF-8 character.
fn complete_utf8_len(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(3) {
        let b = bytes[len - back];
        if b & 0xC0 == 0x80 {
            continue;
        }
        let needed = match b {
            0xF0..=0xFF => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        };
        return if needed > back { len - back } else { len };
    }
    len
}

/// Number of trailing bytes of `bytes` that may be continued by the next buffer.
fn unfinished_tail_len(bytes: &[u8]) -> usize {
    let complete = complete_utf8_len(bytes);
    // The escape tail never holds U+FFFD, so it has the same bytes before
    // and after lossy decoding.
    let text = String::from_utf8_lossy(&bytes[..complete]);
    let escape = text.len() - ansi::unterminated_start(&text);
    bytes.len() - complete + escape
}

/// Byte-stream adapter.
///
/// An unfinished character or escape sequence at the end of a buffer is
/// held back and rendered with the next one; invalid bytes are decoded
/// leniently. The full buffer length is always reported as consumed.
impl<S: Sink> io::Write for Renderer<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.ensure_open()?;
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(buf);

        let tail = unfinished_tail_len(&bytes);
        if tail <= MAX_PENDING {
            self.pending = bytes.split_off(bytes.len() - tail);
        }
        if !bytes.is_empty() {
            self.write_bytes(&bytes)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
