// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_interact
//!
//! Interactive command dispatch for a terminal host: the layer that receives
//! already-decoded interactive VT commands (input injection, window
//! manipulation, cursor moves, focus claims) and applies them to a console
//! through a narrow capability interface.
//!
//! ```text
//! ╭───────────────────────────────────────────────────────────────╮
//! │                     terminal front-end                        │
//! ╰───────────────────────────────┬───────────────────────────────╯
//!                                 │ escape sequences
//!                                 ▼
//!                        VT parser (upstream)
//!                                 │ decoded Command values
//!                                 ▼
//! ╭───────────────────────────────────────────────────────────────╮
//! │ InteractDispatch                                              │
//! │   ├── input_events: key records + keystroke synthesis         │
//! │   ├── coords: terminal/buffer units + viewport clamp          │
//! │   └── focus: window identity + focus security validation      │
//! ╰───────────────────────────────┬───────────────────────────────╯
//!                                 │ ConsoleApi calls
//!                                 ▼
//!                     console host (input queue,
//!                     screen buffer, window shell)
//! ```
//!
//! The crate is host-agnostic: everything observable happens through the
//! [`ConsoleApi`] trait, and the test suite runs the dispatcher against an
//! in-memory recording fake. No escape-sequence parsing, no rendering, no
//! session transport lives here.
//!
//! [`ConsoleApi`]: console_api::ConsoleApi

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub mod console_api;
pub mod coords;
pub mod focus;
pub mod input_events;
pub mod interact_dispatch;

pub use console_api::*;
pub use coords::*;
pub use focus::*;
pub use input_events::*;
pub use interact_dispatch::*;
