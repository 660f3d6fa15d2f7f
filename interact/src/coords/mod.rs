// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Coordinate systems for interactive dispatch.
//!
//! Two coordinate systems meet in this component:
//!
//! - **Terminal coordinates** (1-based): what decoded control commands carry.
//!   Row 1, column 1 is the top-left cell of the viewport. See [`term_units`].
//! - **Buffer coordinates** (0-based): what the console's text buffer and
//!   cursor use internally. See [`buffer_units`].
//!
//! [`cursor_clamp::clamp_to_viewport`] is the one place a terminal position is
//! converted into a buffer position, and it clamps against the viewport while
//! doing so.
//!
//! [`buffer_units`]: mod@buffer_units
//! [`term_units`]: mod@term_units

pub mod buffer_units;
pub mod cursor_clamp;
pub mod term_units;

pub use buffer_units::*;
pub use cursor_clamp::*;
pub use term_units::*;
