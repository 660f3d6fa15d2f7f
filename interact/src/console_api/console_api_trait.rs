// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The capability interface the surrounding console host must supply.
//!
//! This is the narrow seam between the dispatcher and the console internals
//! (text buffer, cursor, viewport, input queue, window, process registry). The
//! production implementation fronts the real console state; tests substitute
//! the recording [`FakeConsole`].
//!
//! Concurrency contract: the host may access the underlying console state from
//! other threads (rendering, client I/O); serializing that shared state is the
//! host's job. The dispatcher only promises that within its single
//! command-processing thread, each call happens-before the next one it issues.
//!
//! [`FakeConsole`]: super::test_fixtures_console_api::FakeConsole

use super::ConsoleApiError;
use crate::{
    coords::{BufferPos, Viewport},
    focus::{ProcessId, WindowHandle},
    input_events::{CodePage, InputEventBatch, KeyEvent},
};

/// Console capabilities consumed by the interactive dispatcher.
pub trait ConsoleApi {
    /// Append a batch of events to the pending input queue, preserving order.
    /// Returns the number of events written.
    fn write_input(&mut self, events: InputEventBatch) -> usize;

    /// Deliver a key event through the generic-key path: the key is queued as
    /// ordinary input for the client to read. Even Ctrl+C must travel this
    /// path without raising a host-level interrupt - that is what
    /// distinguishes an injected control key from a real user break.
    fn write_generic_key(&mut self, event: KeyEvent);

    /// The active output code page, used for keystroke synthesis.
    fn console_output_code_page(&self) -> CodePage;

    /// Show (restore) or hide (minimize) the window.
    fn show_window(&mut self, show: bool);

    /// Request a full redraw of the text buffer.
    fn trigger_redraw_all(&mut self);

    /// Request a window resize in character cells. Returns whether the host
    /// accepted the resize.
    fn resize_window(&mut self, width: i32, height: i32) -> bool;

    /// Current viewport snapshot. Volatile - re-fetch per call.
    fn viewport(&self) -> Viewport;

    /// Move the buffer cursor.
    fn set_cursor_position(&mut self, pos: BufferPos);

    /// Flag that the cursor moved deliberately (not by natural write-advance).
    fn set_cursor_has_moved(&mut self, has_moved: bool);

    /// Whether the input buffer accepts VT input directly.
    fn is_vt_input_enabled(&self) -> bool;

    // Session-mode / window-identity queries. Used only by focus validation.

    /// Whether this is a virtualized/headless (pseudo-console) session.
    fn is_virtual_session(&self) -> bool;

    /// The pseudo window representing this session, if one exists.
    fn pseudo_window(&self) -> Option<WindowHandle>;

    /// The owner recorded for a window by an earlier reparent, if any.
    fn window_owner(&self, window: WindowHandle) -> Option<WindowHandle>;

    /// The window the OS currently reports as foreground, if any.
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// The process owning a window, if the OS will say.
    fn window_process_id(&self, window: WindowHandle) -> Option<ProcessId>;

    // Focus effects. Only the dispatcher's focus path calls these, and only
    // with a validated value.

    /// Update the console's "has focus" flag.
    fn set_has_focus(&mut self, focused: bool);

    /// Notify the process/handle registry of the focus change. The registry
    /// delegates any privileged foreground adjustment to the OS on the
    /// dispatcher's behalf.
    fn modify_console_process_focus(&mut self, focused: bool);

    // Virtualized-I/O collaborator.

    /// Record the cursor position with the virtualized-I/O channel so external
    /// state replay inherits it.
    ///
    /// # Errors
    /// [`ConsoleApiError::CursorTracking`] if the channel rejects the update.
    fn track_cursor_position(&mut self, pos: BufferPos) -> Result<(), ConsoleApiError>;

    /// Suppress exactly one pending repaint triggered by a successful resize.
    ///
    /// # Errors
    /// [`ConsoleApiError::SuppressResizeRepaint`] if the channel rejects the
    /// request.
    fn suppress_resize_repaint(&mut self) -> Result<(), ConsoleApiError>;
}
