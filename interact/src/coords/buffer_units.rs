// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Buffer coordinate units for 0-based positioning, and the viewport rectangle.
//!
//! These are signed (`i32`) rather than unsigned: the cursor transform computes
//! `col - 1 + left` *before* clamping, and that intermediate can be negative when
//! the parser delivers a 0 coordinate. Clamping happens in
//! [`clamp_to_viewport`]; a [`BufferPos`] handed to the capability interface is
//! always inside the viewport it was clamped against.
//!
//! [`clamp_to_viewport`]: super::cursor_clamp::clamp_to_viewport

use std::fmt::Display;

pub fn buf_row(arg: impl Into<BufRow>) -> BufRow { arg.into() }

/// 0-based row index in buffer space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufRow(pub i32);

impl BufRow {
    #[must_use]
    pub const fn new(value: i32) -> Self { Self(value) }

    #[must_use]
    pub const fn as_i32(self) -> i32 { self.0 }
}

impl Display for BufRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BufRow {
    fn from(value: i32) -> Self { Self::new(value) }
}

pub fn buf_col(arg: impl Into<BufCol>) -> BufCol { arg.into() }

/// 0-based column index in buffer space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufCol(pub i32);

impl BufCol {
    #[must_use]
    pub const fn new(value: i32) -> Self { Self(value) }

    #[must_use]
    pub const fn as_i32(self) -> i32 { self.0 }
}

impl Display for BufCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BufCol {
    fn from(value: i32) -> Self { Self::new(value) }
}

/// A point in buffer space (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferPos {
    pub col: BufCol,
    pub row: BufRow,
}

impl BufferPos {
    #[must_use]
    pub fn new(col: impl Into<BufCol>, row: impl Into<BufRow>) -> Self {
        Self {
            col: col.into(),
            row: row.into(),
        }
    }
}

impl Display for BufferPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(col: {}, row: {})", self.col, self.row)
    }
}

/// The visible rectangular region of the console buffer, in buffer coordinates.
///
/// Bounds are inclusive on all four sides, matching the host's viewport
/// representation. Invariant (upheld by the host): `left <= right` and
/// `top <= bottom`.
///
/// This is a read-only snapshot. It must be re-fetched on every cursor move:
/// other host threads (rendering, client I/O) can change the viewport between
/// dispatch calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub left: BufCol,
    pub top: BufRow,
    pub right: BufCol,
    pub bottom: BufRow,
}

impl Viewport {
    #[must_use]
    pub fn new(
        left: impl Into<BufCol>,
        top: impl Into<BufRow>,
        right: impl Into<BufCol>,
        bottom: impl Into<BufRow>,
    ) -> Self {
        Self {
            left: left.into(),
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
        }
    }

    /// Whether the position lies within the (inclusive) bounds.
    #[must_use]
    pub fn contains(&self, pos: BufferPos) -> bool {
        pos.col >= self.left
            && pos.col <= self.right
            && pos.row >= self.top
            && pos.row <= self.bottom
    }
}

impl Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[left: {}, top: {}, right: {}, bottom: {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_viewport_contains_inclusive_bounds() {
        let viewport = Viewport::new(2, 1, 10, 5);

        // All four corners are inside.
        assert!(viewport.contains(BufferPos::new(buf_col(2), buf_row(1))));
        assert!(viewport.contains(BufferPos::new(buf_col(10), buf_row(1))));
        assert!(viewport.contains(BufferPos::new(buf_col(2), buf_row(5))));
        assert!(viewport.contains(BufferPos::new(buf_col(10), buf_row(5))));

        // One past each edge is outside.
        assert!(!viewport.contains(BufferPos::new(buf_col(1), buf_row(1))));
        assert!(!viewport.contains(BufferPos::new(buf_col(11), buf_row(1))));
        assert!(!viewport.contains(BufferPos::new(buf_col(2), buf_row(0))));
        assert!(!viewport.contains(BufferPos::new(buf_col(2), buf_row(6))));
    }

    #[test]
    fn test_display_formats() {
        let pos = BufferPos::new(buf_col(3), buf_row(7));
        assert_eq!(pos.to_string(), "(col: 3, row: 7)");

        let viewport = Viewport::new(0, 0, 79, 24);
        assert_eq!(viewport.to_string(), "[left: 0, top: 0, right: 79, bottom: 24]");
    }
}
