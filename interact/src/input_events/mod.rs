// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input events and keystroke synthesis.
//!
//! - **[`key_event`]**: virtual keys, modifier state, and the synthetic
//!   [`KeyEvent`] record.
//! - **[`input_event`]**: the [`InputEvent`] queue element the capability
//!   interface consumes.
//! - **[`key_synthesis`]**: the string-to-keystroke converter
//!   ([`char_to_key_events`], [`string_to_key_events`]).
//!
//! [`input_event`]: mod@input_event
//! [`key_event`]: mod@key_event
//! [`key_synthesis`]: mod@key_synthesis

pub mod input_event;
pub mod key_event;
pub mod key_synthesis;

pub use input_event::*;
pub use key_event::*;
pub use key_synthesis::*;
