// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Window manipulation: show/hide, refresh, character-cell resize and its
//! repaint suppression, and unhandled functions.

#![cfg(test)]

use crate::{
    console_api::test_fixtures_console_api::FakeConsole,
    input_events::InputEvent,
    interact_dispatch::{
        Command, DispatchError, DispatchResponse, InteractDispatch, WindowManipulation,
    },
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn dispatch_manipulation(
    console: FakeConsole,
    manipulation: WindowManipulation,
) -> (InteractDispatch<FakeConsole>, DispatchResponse) {
    let mut dispatch = InteractDispatch::new(console);
    let response = dispatch
        .dispatch(Command::WindowManipulation { manipulation })
        .unwrap();
    (dispatch, response)
}

#[test_case(WindowManipulation::DeiconifyWindow, true; "deiconify shows")]
#[test_case(WindowManipulation::IconifyWindow, false; "iconify hides")]
fn test_iconify_functions_drive_show_window(
    manipulation: WindowManipulation,
    want_shown: bool,
) {
    let (dispatch, response) = dispatch_manipulation(FakeConsole::new(), manipulation);
    assert!(response.is_handled());
    assert_eq!(dispatch.api().window_shown, Some(want_shown));
}

#[test]
fn test_refresh_triggers_full_redraw() {
    let (dispatch, response) =
        dispatch_manipulation(FakeConsole::new(), WindowManipulation::RefreshWindow);
    assert!(response.is_handled());
    assert_eq!(dispatch.api().redraw_all_count, 1);
}

#[test]
fn test_resize_forwards_dimensions_and_suppresses_one_repaint() {
    let (dispatch, response) = dispatch_manipulation(
        FakeConsole::new(),
        WindowManipulation::ResizeWindowInCharacters {
            height: Some(50),
            width: Some(132),
        },
    );
    assert!(response.is_handled());
    assert_eq!(dispatch.api().last_resize_request, Some((132, 50)));
    assert_eq!(dispatch.api().suppressed_repaints, 1);
}

#[test]
fn test_resize_missing_parameters_default_to_zero() {
    // Preserved behavior: absent parameters request a zero-sized dimension
    // rather than "keep current size".
    let (dispatch, _) = dispatch_manipulation(
        FakeConsole::new(),
        WindowManipulation::ResizeWindowInCharacters {
            height: None,
            width: Some(132),
        },
    );
    assert_eq!(dispatch.api().last_resize_request, Some((132, 0)));

    let (dispatch, _) = dispatch_manipulation(
        FakeConsole::new(),
        WindowManipulation::ResizeWindowInCharacters {
            height: None,
            width: None,
        },
    );
    assert_eq!(dispatch.api().last_resize_request, Some((0, 0)));
}

#[test]
fn test_failed_resize_skips_repaint_suppression() {
    let mut console = FakeConsole::new();
    console.resize_result = false;
    let (dispatch, response) = dispatch_manipulation(
        console,
        WindowManipulation::ResizeWindowInCharacters {
            height: Some(50),
            width: Some(132),
        },
    );
    // Still a handled command; suppression is tied to resize success.
    assert!(response.is_handled());
    assert_eq!(dispatch.api().suppressed_repaints, 0);
}

#[test]
fn test_successful_resize_posts_size_event_into_queue() {
    let (dispatch, _) = dispatch_manipulation(
        FakeConsole::new(),
        WindowManipulation::ResizeWindowInCharacters {
            height: Some(50),
            width: Some(132),
        },
    );
    assert_eq!(
        dispatch.api().queue,
        vec![InputEvent::WindowBufferSize {
            width: 132,
            height: 50,
        }]
    );
}

#[test]
fn test_suppression_fault_propagates() {
    let mut console = FakeConsole::new();
    console.fail_suppress_resize_repaint = true;
    let mut dispatch = InteractDispatch::new(console);

    let result = dispatch.window_manipulation(WindowManipulation::ResizeWindowInCharacters {
        height: Some(50),
        width: Some(132),
    });
    assert!(matches!(result, Err(DispatchError::Capability(_))));
    // The resize itself already happened.
    assert_eq!(dispatch.api().last_resize_request, Some((132, 50)));
}

#[test_case(0; "function 0")]
#[test_case(3; "move window")]
#[test_case(22; "push title")]
fn test_unrecognized_function_is_unhandled_with_no_side_effects(function: u16) {
    let (dispatch, response) = dispatch_manipulation(
        FakeConsole::new(),
        WindowManipulation::Unrecognized { function },
    );
    assert_eq!(response, DispatchResponse::Unhandled);
    assert_eq!(dispatch.api().window_shown, None);
    assert_eq!(dispatch.api().redraw_all_count, 0);
    assert_eq!(dispatch.api().last_resize_request, None);
    assert!(dispatch.api().queue.is_empty());
}
