// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opaque window/process identity types and the per-call identity snapshot.

use crate::console_api::ConsoleApi;
use std::fmt::Display;

/// Opaque handle to a window known to the host's window system.
///
/// The dispatcher never dereferences these; it only compares the process
/// identities the host reports for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

impl Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HWND(0x{:X})", self.0)
    }
}

/// OS process identifier owning a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

impl Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PID({})", self.0)
    }
}

/// Everything the focus security validator needs to know about window identity,
/// captured at the moment a focus claim arrives.
///
/// Captured fresh per claim - foreground ownership is volatile and a stale
/// snapshot would defeat the cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowIdentitySnapshot {
    /// The placeholder window representing this virtualized session.
    pub pseudo_window: Option<WindowHandle>,
    /// The owner recorded for the pseudo window by an earlier reparent.
    pub owner_window: Option<WindowHandle>,
    /// The window the OS currently reports as foreground, if any.
    pub foreground_window: Option<WindowHandle>,
    /// Process owning `owner_window`.
    pub owner_process: Option<ProcessId>,
    /// Process owning `foreground_window`.
    pub foreground_process: Option<ProcessId>,
}

impl WindowIdentitySnapshot {
    /// Assemble the snapshot from capability queries.
    ///
    /// Each link in the chain (pseudo window → owner → foreground → PIDs) is
    /// optional; a missing link simply leaves the rest `None`, which the
    /// validator treats as grounds for denial.
    pub fn capture(api: &impl ConsoleApi) -> Self {
        let pseudo_window = api.pseudo_window();
        let owner_window = pseudo_window.and_then(|window| api.window_owner(window));
        let foreground_window = api.foreground_window();
        let owner_process = owner_window.and_then(|window| api.window_process_id(window));
        let foreground_process =
            foreground_window.and_then(|window| api.window_process_id(window));

        Self {
            pseudo_window,
            owner_window,
            foreground_window,
            owner_process,
            foreground_process,
        }
    }
}
