// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The coordinate transform for cursor placement.
//!
//! Maps a 1-based terminal-space `(row, col)` onto the 0-based buffer grid,
//! anchored at the viewport origin, then clamps the result so the cursor can
//! never land outside the viewport rectangle:
//!
//! ```text
//! x = col - 1 + left          y = row - 1 + top
//! x = clamp(x, left, right)   y = clamp(y, top, bottom)
//! ```
//!
//! The subtraction happens before the clamp, so a (malformed) 0 coordinate from
//! the parser produces `left - 1` / `top - 1` and gets clamped back onto the
//! origin rather than wrapping or erroring.

use super::{BufferPos, TermCol, TermRow, Viewport, buf_col, buf_row};

/// Transform a 1-based terminal position into a clamped buffer position.
///
/// The returned position always satisfies [`Viewport::contains`] for the
/// viewport passed in. Callers must fetch a fresh viewport per call; see
/// [`Viewport`].
#[must_use]
pub fn clamp_to_viewport(row: TermRow, col: TermCol, viewport: Viewport) -> BufferPos {
    let x = i32::from(col.as_u16()) - 1 + viewport.left.as_i32();
    let y = i32::from(row.as_u16()) - 1 + viewport.top.as_i32();

    BufferPos::new(
        buf_col(x.clamp(viewport.left.as_i32(), viewport.right.as_i32())),
        buf_row(y.clamp(viewport.top.as_i32(), viewport.bottom.as_i32())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{term_col, term_row};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn default_viewport() -> Viewport { Viewport::new(0, 0, 79, 24) }

    #[test_case(1, 1, 0, 0; "origin maps to top left")]
    #[test_case(0, 0, 0, 0; "zero coordinates clamp to top left")]
    #[test_case(30, 100, 79, 24; "overshoot clamps to bottom right")]
    #[test_case(25, 80, 79, 24; "exact bottom right corner")]
    #[test_case(5, 10, 9, 4; "interior position")]
    fn test_clamp_default_viewport(row: u16, col: u16, want_x: i32, want_y: i32) {
        let got = clamp_to_viewport(term_row(row), term_col(col), default_viewport());
        assert_eq!(got, BufferPos::new(buf_col(want_x), buf_row(want_y)));
    }

    #[test]
    fn test_clamp_respects_scrolled_viewport_origin() {
        // Viewport scrolled down to buffer rows 100..=124.
        let viewport = Viewport::new(0, 100, 79, 124);

        // (1, 1) is the top-left of the *viewport*, not the buffer.
        let got = clamp_to_viewport(term_row(1), term_col(1), viewport);
        assert_eq!(got, BufferPos::new(buf_col(0), buf_row(100)));

        // Row overshoot clamps to the viewport bottom, not the buffer end.
        let got = clamp_to_viewport(term_row(999), term_col(40), viewport);
        assert_eq!(got, BufferPos::new(buf_col(39), buf_row(124)));
    }

    #[test]
    fn test_clamp_result_is_always_inside_viewport() {
        let viewport = Viewport::new(3, 2, 12, 9);
        for row in 0..32_u16 {
            for col in 0..32_u16 {
                let pos = clamp_to_viewport(term_row(row), term_col(col), viewport);
                assert!(
                    viewport.contains(pos),
                    "({row}, {col}) escaped the viewport: {pos}"
                );
            }
        }
    }
}
