// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Failures the capability interface can surface to the dispatcher.
//!
//! Only the virtualized-I/O calls are fallible; everything else on
//! [`ConsoleApi`] either cannot fail or reports failure in-band (resize returns
//! a `bool`). The dispatcher propagates these without retrying and without
//! partially applying the command that triggered them.
//!
//! [`ConsoleApi`]: super::ConsoleApi

/// Errors raised by [`ConsoleApi`] implementations.
///
/// [`ConsoleApi`]: super::ConsoleApi
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConsoleApiError {
    /// The virtualized-I/O channel rejected the cursor position update.
    #[error("console host rejected cursor position tracking")]
    #[diagnostic(
        code(r3bl_interact::console_api::cursor_tracking),
        help(
            "The virtualized-I/O channel to the terminal front-end refused the \
             position update. The connection may be shutting down."
        )
    )]
    CursorTracking,

    /// The virtualized-I/O channel rejected the repaint suppression request.
    #[error("console host rejected resize repaint suppression")]
    #[diagnostic(
        code(r3bl_interact::console_api::suppress_resize_repaint),
        help(
            "The resize succeeded but the follow-up repaint could not be \
             suppressed; expect one redundant redraw cycle."
        )
    )]
    SuppressResizeRepaint,
}
