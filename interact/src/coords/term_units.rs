// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal coordinate units for 1-based positioning.
//!
//! Decoded control commands address the screen the way escape sequences do: row 1,
//! column 1 is the top-left cell of the viewport. Buffer coordinates are 0-based
//! (see [`buffer_units`]). These newtypes keep the two coordinate systems from being
//! mixed accidentally; the only sanctioned crossing point is
//! [`clamp_to_viewport`], which also applies the viewport boundary tests.
//!
//! A `TermRow`/`TermCol` of 0 is representable on purpose: the upstream parser can
//! deliver 0 (missing or malformed parameter) and the transform must clamp it, not
//! reject it.
//!
//! [`buffer_units`]: mod@super::buffer_units
//! [`clamp_to_viewport`]: super::cursor_clamp::clamp_to_viewport

use std::fmt::Display;

pub fn term_row(arg: impl Into<TermRow>) -> TermRow { arg.into() }

/// 1-based row index in terminal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRow(pub u16);

impl TermRow {
    #[must_use]
    pub const fn new(value: u16) -> Self { Self(value) }

    /// Get the raw 1-based value.
    #[must_use]
    pub const fn as_u16(self) -> u16 { self.0 }
}

impl Display for TermRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn term_col(arg: impl Into<TermCol>) -> TermCol { arg.into() }

/// 1-based column index in terminal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermCol(pub u16);

impl TermCol {
    #[must_use]
    pub const fn new(value: u16) -> Self { Self(value) }

    /// Get the raw 1-based value.
    #[must_use]
    pub const fn as_u16(self) -> u16 { self.0 }
}

impl Display for TermCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod convenience_conversions {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<u16> for TermRow {
        fn from(value: u16) -> Self { Self::new(value) }
    }

    impl From<u16> for TermCol {
        fn from(value: u16) -> Self { Self::new(value) }
    }

    impl From<i32> for TermRow {
        fn from(value: i32) -> Self {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                Self::new(value.max(0) as u16)
            }
        }
    }

    impl From<i32> for TermCol {
        fn from(value: i32) -> Self {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                Self::new(value.max(0) as u16)
            }
        }
    }
}
