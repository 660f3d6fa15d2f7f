// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Behavior tests for [`InteractDispatch`] run against the recording
//! [`FakeConsole`], grouped by operation family.
//!
//! [`FakeConsole`]: crate::console_api::test_fixtures_console_api::FakeConsole
//! [`InteractDispatch`]: super::InteractDispatch

pub mod test_cursor_ops;
pub mod test_focus_ops;
pub mod test_input_ops;
pub mod test_window_ops;
