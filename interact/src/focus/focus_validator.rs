// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The focus security validator.
//!
//! A virtualized session's terminal front-end reports focus transitions over
//! the input pipe. Losing focus is harmless, so that claim is always trusted.
//! *Gaining* focus confers privileges (e.g. permission to raise pop-ups), so a
//! "focused" claim is honored only when the process that owns this session's
//! pseudo window is the same process the OS reports as owning the real
//! foreground window. Anything less and a background process could assert
//! focus it does not have.
//!
//! The decision is a pure function over a [`WindowIdentitySnapshot`]; plumbing
//! (capturing the snapshot, applying the effects) lives in the dispatch core.

use super::WindowIdentitySnapshot;

/// Outcome of validating a focus claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusClaim {
    /// The claim is trusted; apply the claimed value.
    Granted,
    /// The claim failed the cross-check; apply "not focused" regardless of
    /// what was claimed.
    Denied,
}

impl FocusClaim {
    /// The focus value to actually apply for a claim with this outcome.
    #[must_use]
    pub const fn apply(self, claimed: bool) -> bool {
        match self {
            Self::Granted => claimed,
            Self::Denied => false,
        }
    }
}

/// Validate a focus claim against the window identities captured at claim time.
///
/// Policy:
/// - `claimed = false` is always granted (any process may renounce focus).
/// - `claimed = true` is granted only when the pseudo window exists, it has a
///   recorded owner, the OS reports a foreground window, both process IDs are
///   known, and they are equal.
#[must_use]
pub fn validate_focus_claim(
    claimed: bool,
    snapshot: &WindowIdentitySnapshot,
) -> FocusClaim {
    if !claimed {
        return FocusClaim::Granted;
    }

    let chain_verified = snapshot.pseudo_window.is_some()
        && snapshot.owner_window.is_some()
        && snapshot.foreground_window.is_some()
        && match (snapshot.owner_process, snapshot.foreground_process) {
            (Some(owner_pid), Some(foreground_pid)) => owner_pid == foreground_pid,
            _ => false,
        };

    if chain_verified {
        FocusClaim::Granted
    } else {
        FocusClaim::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{ProcessId, WindowHandle};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn full_snapshot(owner_pid: u32, foreground_pid: u32) -> WindowIdentitySnapshot {
        WindowIdentitySnapshot {
            pseudo_window: Some(WindowHandle(0x100)),
            owner_window: Some(WindowHandle(0x200)),
            foreground_window: Some(WindowHandle(0x300)),
            owner_process: Some(ProcessId(owner_pid)),
            foreground_process: Some(ProcessId(foreground_pid)),
        }
    }

    #[test]
    fn test_unfocus_claim_is_always_granted() {
        // Even an empty identity chain may renounce focus.
        let empty = WindowIdentitySnapshot::default();
        assert_eq!(validate_focus_claim(false, &empty), FocusClaim::Granted);
        assert!(!FocusClaim::Granted.apply(false));
    }

    #[test]
    fn test_focus_claim_granted_when_owner_is_foreground() {
        let snapshot = full_snapshot(42, 42);
        let outcome = validate_focus_claim(true, &snapshot);
        assert_eq!(outcome, FocusClaim::Granted);
        assert!(outcome.apply(true));
    }

    #[test]
    fn test_focus_claim_denied_when_owner_is_not_foreground() {
        let snapshot = full_snapshot(42, 1337);
        let outcome = validate_focus_claim(true, &snapshot);
        assert_eq!(outcome, FocusClaim::Denied);
        assert!(!outcome.apply(true));
    }

    #[test_case(
        WindowIdentitySnapshot::default();
        "no pseudo window"
    )]
    #[test_case(
        WindowIdentitySnapshot {
            pseudo_window: Some(WindowHandle(0x100)),
            ..Default::default()
        };
        "pseudo window without recorded owner"
    )]
    #[test_case(
        WindowIdentitySnapshot {
            pseudo_window: Some(WindowHandle(0x100)),
            owner_window: Some(WindowHandle(0x200)),
            owner_process: Some(ProcessId(42)),
            ..Default::default()
        };
        "no foreground window exists"
    )]
    #[test_case(
        WindowIdentitySnapshot {
            foreground_process: None,
            ..full_snapshot(42, 42)
        };
        "foreground pid unknown"
    )]
    fn test_focus_claim_denied_on_broken_identity_chain(snapshot: WindowIdentitySnapshot) {
        assert_eq!(validate_focus_claim(true, &snapshot), FocusClaim::Denied);
    }
}
