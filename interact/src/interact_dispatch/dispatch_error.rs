// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dispatch results and errors.
//!
//! The failure taxonomy has three tiers:
//!
//! | Outcome                          | Surface                              | Fatal? |
//! | :------------------------------- | :----------------------------------- | :----- |
//! | Command applied                  | [`DispatchResponse::Handled`]        | -      |
//! | Unrecognized window function     | [`DispatchResponse::Unhandled`]      | No     |
//! | Capability interface fault       | [`DispatchError::Capability`]        | Caller decides |
//!
//! "Unhandled" is a normal negative result, not an error: an unrecognized
//! window-manipulation function performs no side effect and the command stream
//! continues. Capability faults propagate unmodified - the dispatcher never
//! retries and never partially applies a command.

use crate::console_api::ConsoleApiError;

/// What a dispatch call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResponse {
    /// The command was recognized and fully applied.
    Handled,
    /// The command was recognized but names a function this dispatcher does
    /// not implement; no side effect was performed.
    Unhandled,
    /// Answer to [`Command::QueryVtInputEnabled`].
    ///
    /// [`Command::QueryVtInputEnabled`]: super::Command::QueryVtInputEnabled
    VtInputEnabled(bool),
}

impl DispatchResponse {
    #[must_use]
    pub const fn is_handled(self) -> bool { matches!(self, Self::Handled) }
}

/// Errors surfaced by dispatch operations.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DispatchError {
    /// A capability interface call failed; the triggering command was not
    /// (further) applied.
    #[error("console capability call failed during dispatch")]
    #[diagnostic(code(r3bl_interact::dispatch::capability))]
    Capability(
        #[from]
        #[diagnostic_source]
        ConsoleApiError,
    ),
}
