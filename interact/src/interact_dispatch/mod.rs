// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive command dispatch.
//!
//! - **[`dispatch_command`]**: the decoded [`Command`] surface and the
//!   XTWINOPS window-manipulation vocabulary.
//! - **[`interact_dispatch_impl`]**: [`InteractDispatch`], the operation
//!   implementations over a [`ConsoleApi`] capability.
//! - **[`dispatch_error`]**: [`DispatchResponse`] and [`DispatchError`].
//! - **[`dispatch_conformance_tests`]**: behavior tests run against the
//!   recording fake console.
//!
//! [`ConsoleApi`]: crate::console_api::ConsoleApi
//! [`dispatch_command`]: mod@dispatch_command
//! [`dispatch_error`]: mod@dispatch_error
//! [`interact_dispatch_impl`]: mod@interact_dispatch_impl

pub mod dispatch_command;
pub mod dispatch_error;
pub mod interact_dispatch_impl;

#[cfg(any(test, doc))]
pub mod dispatch_conformance_tests;

pub use dispatch_command::*;
pub use dispatch_error::*;
pub use interact_dispatch_impl::*;
