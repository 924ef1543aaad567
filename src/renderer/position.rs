//! Cursor position tracking.
//!
//! Holds the current and saved cursor coordinates and clamps every update
//! into the visible window, recording on which side a rejected row fell.

use std::ops::{Add, Sub};

/// A cursor coordinate relative to the renderer's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Visible window dimensions in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub width: usize,
    pub height: usize,
}

impl Window {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Largest valid column (the pending-wrap column after a full line).
    pub fn max_x(&self) -> i64 {
        to_i64(self.width)
    }

    /// Largest valid row; `-1` for a window without rows.
    pub fn max_y(&self) -> i64 {
        to_i64(self.height) - 1
    }
}

pub(crate) fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Which side of the window the last requested row fell on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    None,
    Above,
    Below,
}

impl Overflow {
    /// Row offset added to the clamped row when reporting the position.
    pub fn row_offset(self) -> i64 {
        match self {
            Overflow::None => 0,
            Overflow::Above => -1,
            Overflow::Below => 1,
        }
    }
}

/// Current/saved cursor state for one output stream.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    current: Position,
    saved: Position,
    overflow: Overflow,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clamped cursor coordinate.
    pub fn current(&self) -> Position {
        self.current
    }

    /// The clamped coordinate with the overflow row offset applied.
    pub fn reported(&self) -> Position {
        Position::new(self.current.x, self.current.y + self.overflow.row_offset())
    }

    pub fn saved(&self) -> Position {
        self.saved
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Clamp `target` into `window`, record the overflow side and store it.
    pub fn set_position(&mut self, target: Position, window: Window) -> Position {
        let max_y = window.max_y();
        self.overflow = if target.y > max_y {
            Overflow::Below
        } else if target.y < 0 {
            Overflow::Above
        } else {
            Overflow::None
        };
        self.current = Position::new(
            target.x.clamp(0, window.max_x()),
            target.y.clamp(0, max_y.max(0)),
        );
        self.current
    }

    /// Move relative to the clamped coordinate.
    pub fn move_relative(&mut self, dx: i64, dy: i64, window: Window) -> Position {
        self.set_position(self.current + Position::new(dx, dy), window)
    }

    /// Remember a coordinate for a later [`restore`](Self::restore).
    pub fn save(&mut self, position: Position) {
        self.saved = position;
    }

    /// Re-apply the saved coordinate through the clamping path.
    pub fn restore(&mut self, window: Window) -> Position {
        self.set_position(self.saved, window)
    }
}
