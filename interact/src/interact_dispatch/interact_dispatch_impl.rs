// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The dispatch core: one stateless entry point per decoded command.
//!
//! ```text
//! ╭──────────────╮    ╭──────────────────╮    ╭───────────────────────╮
//! │ VT parser    │────▶ InteractDispatch │────▶ ConsoleApi capability │
//! │ (upstream)   │    │ (this module)    │    │ (host-supplied)       │
//! ╰──────────────╯    ╰──────────────────╯    ╰───────────────────────╯
//!                              │
//!                   ╭──────────┼─────────────╮
//!                   ▼          ▼             ▼
//!            cursor clamp   keystroke    focus security
//!                           synthesis      validator
//! ```
//!
//! The dispatcher owns its capability handle and nothing else: every other
//! value is constructed per call and moved into the capability interface
//! before the call returns. Calls are synchronous and complete fully before
//! returning; ordering across calls is the single command-processing thread's
//! ordering.

use super::{Command, DispatchError, DispatchResponse, WindowManipulation};
use crate::{
    console_api::ConsoleApi,
    coords::{TermCol, TermRow, clamp_to_viewport},
    focus::{FocusClaim, WindowIdentitySnapshot, validate_focus_claim},
    input_events::{InputEvent, InputEventBatch, KeyEvent, string_to_key_events},
};

/// Interactive command dispatcher over a console capability interface.
///
/// Construction takes the capability implementation by value - there is no
/// "absent capability" state to guard against.
#[derive(Debug)]
pub struct InteractDispatch<A: ConsoleApi> {
    api: A,
}

impl<A: ConsoleApi> InteractDispatch<A> {
    pub fn new(api: A) -> Self { Self { api } }

    /// Borrow the capability interface (tests inspect the fake through this).
    pub fn api(&self) -> &A { &self.api }

    /// Mutably borrow the capability interface.
    pub fn api_mut(&mut self) -> &mut A { &mut self.api }

    /// Route one decoded command to its operation.
    ///
    /// # Errors
    /// Propagates any [`DispatchError::Capability`] fault from the underlying
    /// operation.
    pub fn dispatch(&mut self, command: Command) -> Result<DispatchResponse, DispatchError> {
        match command {
            Command::WriteInput { events } => {
                self.write_input(events)?;
                Ok(DispatchResponse::Handled)
            }
            Command::WriteCtrlKey { event } => {
                self.write_ctrl_key(event)?;
                Ok(DispatchResponse::Handled)
            }
            Command::WriteString { text } => {
                self.write_string(&text)?;
                Ok(DispatchResponse::Handled)
            }
            Command::WindowManipulation { manipulation } => {
                self.window_manipulation(manipulation)
            }
            Command::MoveCursor { row, col } => {
                self.move_cursor(row, col)?;
                Ok(DispatchResponse::Handled)
            }
            Command::QueryVtInputEnabled => {
                Ok(DispatchResponse::VtInputEnabled(self.is_vt_input_enabled()))
            }
            Command::FocusChanged { focused } => {
                self.focus_changed(focused)?;
                Ok(DispatchResponse::Handled)
            }
        }
    }

    /// Append a batch of input events to the pending input queue in one
    /// logical operation, preserving order exactly as received.
    ///
    /// # Errors
    /// None at this layer; the signature leaves room for hosts whose queue
    /// writes can fault.
    pub fn write_input(&mut self, events: InputEventBatch) -> Result<(), DispatchError> {
        let written = self.api.write_input(events);
        tracing::debug!("wrote {written} input events to pending queue");
        Ok(())
    }

    /// Deliver a key event through the generic-key path.
    ///
    /// Even a Ctrl+C arriving here is queued as ordinary input for the client
    /// to read - an injected control key must never raise a host-level
    /// interrupt. That is the contract separating synthetic control keys from
    /// a real user-generated break.
    ///
    /// # Errors
    /// None at this layer.
    pub fn write_ctrl_key(&mut self, event: KeyEvent) -> Result<(), DispatchError> {
        self.api.write_generic_key(event);
        Ok(())
    }

    /// Inject a string as keystrokes: synthesize per-character key sequences
    /// against the active output code page and submit them as one batch.
    ///
    /// Empty input is a no-op success.
    ///
    /// # Errors
    /// None at this layer.
    pub fn write_string(&mut self, text: &str) -> Result<(), DispatchError> {
        if text.is_empty() {
            return Ok(());
        }

        let code_page = self.api.console_output_code_page();
        let key_events = string_to_key_events(text, code_page);
        let batch: InputEventBatch =
            key_events.into_iter().map(InputEvent::from).collect();
        self.write_input(batch)
    }

    /// Perform a window-manipulation function.
    ///
    /// Returns [`DispatchResponse::Unhandled`] (no side effect) for
    /// unrecognized functions. A successful character-cell resize additionally
    /// suppresses exactly one pending repaint, the redundant redraw cycle a
    /// resize triggers in virtualized sessions; a failed resize leaves the
    /// suppression un-issued.
    ///
    /// # Errors
    /// [`DispatchError::Capability`] if repaint suppression faults.
    pub fn window_manipulation(
        &mut self,
        manipulation: WindowManipulation,
    ) -> Result<DispatchResponse, DispatchError> {
        match manipulation {
            WindowManipulation::DeiconifyWindow => {
                self.api.show_window(true);
                Ok(DispatchResponse::Handled)
            }
            WindowManipulation::IconifyWindow => {
                self.api.show_window(false);
                Ok(DispatchResponse::Handled)
            }
            WindowManipulation::RefreshWindow => {
                self.api.trigger_redraw_all();
                Ok(DispatchResponse::Handled)
            }
            WindowManipulation::ResizeWindowInCharacters { height, width } => {
                // Missing parameters default to 0 (zero-sized request).
                let width = width.unwrap_or(0);
                let height = height.unwrap_or(0);
                if self.api.resize_window(width, height) {
                    self.api.suppress_resize_repaint()?;
                }
                Ok(DispatchResponse::Handled)
            }
            WindowManipulation::Unrecognized { function } => {
                tracing::warn!("unhandled window manipulation function {function}");
                Ok(DispatchResponse::Unhandled)
            }
        }
    }

    /// Move the cursor to a 1-based terminal position, clamped to the current
    /// viewport.
    ///
    /// The viewport is re-fetched on every call (it can change between
    /// commands), and the clamped position is applied to both collaborators
    /// that must stay synchronized: the virtualized-I/O position tracker and
    /// the buffer cursor, whose has-moved flag is set so downstream consumers
    /// know this was a deliberate move.
    ///
    /// # Errors
    /// [`DispatchError::Capability`] if cursor tracking faults; the buffer
    /// cursor is then left untouched.
    pub fn move_cursor(&mut self, row: TermRow, col: TermCol) -> Result<(), DispatchError> {
        let viewport = self.api.viewport();
        let pos = clamp_to_viewport(row, col, viewport);
        tracing::debug!("move cursor ({row}, {col}) -> {pos} within {viewport}");

        self.api.track_cursor_position(pos)?;

        self.api.set_cursor_position(pos);
        self.api.set_cursor_has_moved(true);
        Ok(())
    }

    /// Whether the input buffer accepts VT input directly. Pure passthrough.
    #[must_use]
    pub fn is_vt_input_enabled(&self) -> bool { self.api.is_vt_input_enabled() }

    /// Apply a focus-change claim from the terminal front-end.
    ///
    /// Outside a virtualized session this is a no-op: a real window is solely
    /// authoritative for its own focus. Inside one, the claim runs through the
    /// focus security validator; the *validated* value updates the focus flag
    /// and the process registry, while the queued notification carries the
    /// *claimed* value so listeners observe the transition the terminal
    /// reported.
    ///
    /// # Errors
    /// None at this layer.
    pub fn focus_changed(&mut self, focused: bool) -> Result<(), DispatchError> {
        if !self.api.is_virtual_session() {
            return Ok(());
        }

        let snapshot = WindowIdentitySnapshot::capture(&self.api);
        let outcome = validate_focus_claim(focused, &snapshot);
        if focused && outcome == FocusClaim::Denied {
            tracing::warn!(
                "denied focus claim: owner/foreground identity mismatch ({snapshot:?})"
            );
        }
        let validated = outcome.apply(focused);

        self.api.set_has_focus(validated);
        self.api.modify_console_process_focus(validated);

        let mut batch = InputEventBatch::new();
        batch.push(InputEvent::Focus { focused });
        self.api.write_input(batch);
        Ok(())
    }
}
