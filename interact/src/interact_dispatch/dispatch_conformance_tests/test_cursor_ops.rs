// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement: clamping, dual application, fault ordering.

#![cfg(test)]

use crate::{
    console_api::test_fixtures_console_api::FakeConsole,
    coords::{BufferPos, Viewport, term_col, term_row},
    interact_dispatch::{Command, DispatchError, InteractDispatch},
};
use pretty_assertions::assert_eq;
use test_case::test_case;

// Default fake viewport is (0,0)..=(79,24).
#[test_case(1, 1, 0, 0; "origin maps to buffer origin")]
#[test_case(0, 0, 0, 0; "zero coordinates clamp to origin")]
#[test_case(30, 100, 79, 24; "overshoot clamps to bottom right")]
#[test_case(25, 80, 79, 24; "bottom right corner")]
fn test_move_cursor_clamps_to_viewport(row: u16, col: u16, want_x: i32, want_y: i32) {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    let response = dispatch
        .dispatch(Command::MoveCursor {
            row: term_row(row),
            col: term_col(col),
        })
        .unwrap();

    assert!(response.is_handled());
    let want = BufferPos::new(want_x, want_y);
    assert_eq!(dispatch.api().cursor_pos, Some(want));
    assert_eq!(dispatch.api().tracked_cursor_pos, Some(want));
}

#[test]
fn test_move_cursor_is_viewport_relative_when_scrolled() {
    let mut console = FakeConsole::new();
    // Viewport scrolled down to buffer rows 100..=124.
    console.viewport = Viewport::new(0, 100, 79, 124);
    let mut dispatch = InteractDispatch::new(console);

    dispatch
        .move_cursor(term_row(1), term_col(1))
        .unwrap();
    assert_eq!(dispatch.api().cursor_pos, Some(BufferPos::new(0, 100)));

    dispatch
        .move_cursor(term_row(200), term_col(5))
        .unwrap();
    assert_eq!(dispatch.api().cursor_pos, Some(BufferPos::new(4, 124)));
}

#[test]
fn test_move_cursor_sets_has_moved_flag() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    assert!(!dispatch.api().cursor_has_moved);

    dispatch.move_cursor(term_row(3), term_col(7)).unwrap();
    assert!(dispatch.api().cursor_has_moved);
}

#[test]
fn test_move_cursor_tracking_fault_leaves_buffer_cursor_untouched() {
    let mut console = FakeConsole::new();
    console.fail_cursor_tracking = true;
    let mut dispatch = InteractDispatch::new(console);

    let result = dispatch.move_cursor(term_row(5), term_col(5));
    assert!(matches!(result, Err(DispatchError::Capability(_))));

    // The fault happened before either cursor mutation.
    assert_eq!(dispatch.api().cursor_pos, None);
    assert!(!dispatch.api().cursor_has_moved);
}

#[test]
fn test_move_cursor_refetches_viewport_per_call() {
    let mut dispatch = InteractDispatch::new(FakeConsole::new());
    dispatch.move_cursor(term_row(25), term_col(80)).unwrap();
    assert_eq!(dispatch.api().cursor_pos, Some(BufferPos::new(79, 24)));

    // Shrink the viewport between two moves on the *same* dispatcher; the
    // second move must clamp against the new bounds, not a cached snapshot.
    dispatch.api_mut().viewport = Viewport::new(0, 0, 39, 9);
    dispatch.move_cursor(term_row(25), term_col(80)).unwrap();
    assert_eq!(dispatch.api().cursor_pos, Some(BufferPos::new(39, 9)));
    assert_eq!(dispatch.api().tracked_cursor_pos, Some(BufferPos::new(39, 9)));
}
