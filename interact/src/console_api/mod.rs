// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability seam between dispatcher and console host.
//!
//! - **[`console_api_trait`]**: the [`ConsoleApi`] trait the host implements.
//! - **[`console_api_error`]**: [`ConsoleApiError`] for the fallible calls.
//! - **[`test_fixtures_console_api`]**: recording [`FakeConsole`] for tests.
//!
//! [`FakeConsole`]: test_fixtures_console_api::FakeConsole
//! [`console_api_error`]: mod@console_api_error
//! [`console_api_trait`]: mod@console_api_trait

pub mod console_api_error;
pub mod console_api_trait;

#[cfg(any(test, doc))]
pub mod test_fixtures_console_api;

pub use console_api_error::*;
pub use console_api_trait::*;
