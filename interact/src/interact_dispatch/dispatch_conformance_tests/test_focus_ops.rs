// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Focus-change claims: the non-virtual no-op, the identity-chain validation
//! matrix, and which value lands where (flag, registry, queue).

#![cfg(test)]

use crate::{
    console_api::test_fixtures_console_api::FakeConsole,
    focus::{ProcessId, WindowHandle},
    interact_dispatch::{Command, InteractDispatch},
};
use pretty_assertions::assert_eq;

#[test]
fn test_focus_claim_outside_virtual_session_is_noop() {
    // A real window is authoritative for its own focus.
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    let response = dispatch
        .dispatch(Command::FocusChanged { focused: true })
        .unwrap();

    assert!(response.is_handled());
    assert!(!dispatch.api().has_focus);
    assert!(dispatch.api().process_focus_notifications.is_empty());
    assert!(dispatch.api().queue.is_empty());
}

#[test]
fn test_focus_gain_granted_when_owner_is_foreground() {
    let console = FakeConsole::virtual_session_with_identity(42, 42);
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();

    assert!(dispatch.api().has_focus);
    assert_eq!(dispatch.api().process_focus_notifications, vec![true]);
    assert_eq!(dispatch.api().queued_focus_events(), vec![true]);
}

#[test]
fn test_focus_gain_denied_when_foreground_is_another_process() {
    let console = FakeConsole::virtual_session_with_identity(42, 999);
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();

    // The validated value (false) lands in the flag and the registry.
    assert!(!dispatch.api().has_focus);
    assert_eq!(dispatch.api().process_focus_notifications, vec![false]);
    // The queued notification carries the claimed value regardless.
    assert_eq!(dispatch.api().queued_focus_events(), vec![true]);
}

#[test]
fn test_focus_loss_is_always_trusted() {
    // Start focused, with an identity chain that would deny a gain.
    let mut console = FakeConsole::virtual_session_with_identity(42, 999);
    console.has_focus = true;
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(false).unwrap();

    assert!(!dispatch.api().has_focus);
    assert_eq!(dispatch.api().process_focus_notifications, vec![false]);
    assert_eq!(dispatch.api().queued_focus_events(), vec![false]);
}

#[test]
fn test_focus_gain_denied_without_pseudo_window() {
    let mut console = FakeConsole::virtual_session_with_identity(42, 42);
    console.pseudo_window = None;
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();
    assert!(!dispatch.api().has_focus);
}

#[test]
fn test_focus_gain_denied_without_recorded_owner() {
    let mut console = FakeConsole::virtual_session_with_identity(42, 42);
    console.window_owners.clear();
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();
    assert!(!dispatch.api().has_focus);
}

#[test]
fn test_focus_gain_denied_without_foreground_window() {
    let mut console = FakeConsole::virtual_session_with_identity(42, 42);
    console.foreground = None;
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();
    assert!(!dispatch.api().has_focus);
}

#[test]
fn test_focus_gain_denied_when_owner_pid_unresolvable() {
    let mut console = FakeConsole::virtual_session_with_identity(42, 42);
    console
        .process_ids
        .retain(|(window, _)| *window != WindowHandle(0x200));
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();
    assert!(!dispatch.api().has_focus);
}

#[test]
fn test_repeated_claims_each_enqueue_an_event() {
    let console = FakeConsole::virtual_session_with_identity(7, 7);
    let mut dispatch = InteractDispatch::new(console);

    dispatch.focus_changed(true).unwrap();
    dispatch.focus_changed(false).unwrap();
    dispatch.focus_changed(true).unwrap();

    assert_eq!(
        dispatch.api().queued_focus_events(),
        vec![true, false, true]
    );
    assert_eq!(
        dispatch.api().process_focus_notifications,
        vec![true, false, true]
    );
    assert!(dispatch.api().has_focus);
}

#[test]
fn test_identity_lookup_uses_owner_of_pseudo_window() {
    // Owner PID matches the foreground PID even though the handles differ;
    // the comparison is process identity, not window identity.
    let console = FakeConsole::virtual_session_with_identity(42, 42);
    assert_eq!(
        console.process_ids,
        vec![
            (WindowHandle(0x200), ProcessId(42)),
            (WindowHandle(0x300), ProcessId(42)),
        ]
    );
    let mut dispatch = InteractDispatch::new(console);
    dispatch.focus_changed(true).unwrap();
    assert!(dispatch.api().has_focus);
}
