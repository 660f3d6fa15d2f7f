// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input injection: event batches, the generic control-key path, string
//! synthesis, and the VT-input query.

#![cfg(test)]

use crate::{
    console_api::test_fixtures_console_api::FakeConsole,
    input_events::{
        CodePage, InputEvent, InputEventBatch, KeyEvent, ModifierKeys, VirtualKey,
    },
    interact_dispatch::{Command, DispatchResponse, InteractDispatch},
};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

#[test]
fn test_write_input_preserves_batch_order() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());

    let a = KeyEvent::pressed(VirtualKey::letter('a'), 'a', ModifierKeys::none());
    let b = KeyEvent::pressed(VirtualKey::letter('b'), 'b', ModifierKeys::none());
    let events: InputEventBatch = smallvec![InputEvent::Key(a), InputEvent::Key(b)];

    let response = dispatch.dispatch(Command::WriteInput { events }).unwrap();
    assert!(response.is_handled());
    assert_eq!(
        dispatch.api().queue,
        vec![InputEvent::Key(a), InputEvent::Key(b)]
    );
}

#[test]
fn test_write_input_empty_batch_is_ok() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    let response = dispatch
        .dispatch(Command::WriteInput {
            events: InputEventBatch::new(),
        })
        .unwrap();
    assert!(response.is_handled());
    assert!(dispatch.api().queue.is_empty());
}

#[test]
fn test_ctrl_c_is_queued_as_ordinary_input() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());

    let ctrl_c = KeyEvent::pressed(
        VirtualKey::letter('c'),
        '\u{3}',
        ModifierKeys::ctrl_only(),
    );
    dispatch
        .dispatch(Command::WriteCtrlKey { event: ctrl_c })
        .unwrap();

    // The capability surface has no break-signal path at all; the generic
    // path appends exactly one ordinary key record and nothing else.
    assert_eq!(dispatch.api().queue, vec![InputEvent::Key(ctrl_c)]);
}

#[test]
fn test_write_string_empty_is_complete_noop() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    let response = dispatch
        .dispatch(Command::WriteString {
            text: String::new(),
        })
        .unwrap();
    assert!(response.is_handled());
    assert!(dispatch.api().queue.is_empty());
}

#[test]
fn test_write_string_replay_reconstructs_text() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    let text = "Hello, World! caf\u{e9}\r";
    dispatch
        .dispatch(Command::WriteString { text: text.into() })
        .unwrap();

    assert_eq!(dispatch.api().replay_injected_text(), text);
}

#[test]
fn test_write_string_uses_active_code_page() {
    let mut console = FakeConsole::new();
    console.code_page = CodePage::WINDOWS_1252;
    let mut dispatch = InteractDispatch::new(console);

    // 'é' is byte 233 in windows-1252, a 3-digit alt-code run:
    // alt down + 3 numpad pairs + alt up = 8 events.
    dispatch.write_string("\u{e9}").unwrap();
    assert_eq!(dispatch.api().queue.len(), 8);
    assert_eq!(dispatch.api().replay_injected_text(), "\u{e9}");
}

#[test]
fn test_query_vt_input_enabled_passthrough() {
    let mut console = FakeConsole::new();
    console.vt_input_enabled = true;
    let mut dispatch = InteractDispatch::new(console);
    assert_eq!(
        dispatch.dispatch(Command::QueryVtInputEnabled).unwrap(),
        DispatchResponse::VtInputEnabled(true)
    );

    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    assert_eq!(
        dispatch.dispatch(Command::QueryVtInputEnabled).unwrap(),
        DispatchResponse::VtInputEnabled(false)
    );
}

#[test]
fn test_query_vt_input_enabled_has_no_side_effects() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    dispatch.dispatch(Command::QueryVtInputEnabled).unwrap();
    assert!(dispatch.api().queue.is_empty());
    assert_eq!(dispatch.api().cursor_pos, None);
}
