// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The decoded command surface the upstream parser delivers.
//!
//! Each [`Command`] is a plain value object - the wire format (escape
//! sequences) is parsed upstream and never reaches this layer. Window
//! manipulation arrives from the parser as a raw XTWINOPS function number plus
//! up to two optional integers; [`WindowManipulation::from_raw`] turns that
//! into a tagged variant with named fields so missing-parameter defaults are
//! applied in exactly one place.

use crate::{
    coords::{TermCol, TermRow},
    input_events::{InputEventBatch, KeyEvent},
};
use strum_macros::FromRepr;

/// The XTWINOPS function numbers this dispatcher understands.
///
/// The set is deliberately small: these are the functions meaningful for an
/// interactive (input-side) dispatch target. Values outside this enum are a
/// normal, non-fatal "unhandled" outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u16)]
pub enum WindowManipulationType {
    DeiconifyWindow = 1,
    IconifyWindow = 2,
    RefreshWindow = 7,
    ResizeWindowInCharacters = 8,
}

/// A window-manipulation request with named, typed fields per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowManipulation {
    /// Show (restore) the window.
    DeiconifyWindow,
    /// Hide (minimize) the window.
    IconifyWindow,
    /// Redraw the entire text buffer.
    RefreshWindow,
    /// Resize the window in character cells. On the wire, parameter 1 is the
    /// height and parameter 2 is the width; a missing parameter defaults to 0
    /// at dispatch time (requesting a zero-sized dimension - preserved
    /// behavior, covered by an explicit test).
    ResizeWindowInCharacters {
        height: Option<i32>,
        width: Option<i32>,
    },
    /// A function number this dispatcher does not handle.
    Unrecognized { function: u16 },
}

impl WindowManipulation {
    /// Build from the raw shape the parser delivers: a function number and up
    /// to two optional integer parameters.
    #[must_use]
    pub fn from_raw(function: u16, param1: Option<i32>, param2: Option<i32>) -> Self {
        match WindowManipulationType::from_repr(function) {
            Some(WindowManipulationType::DeiconifyWindow) => Self::DeiconifyWindow,
            Some(WindowManipulationType::IconifyWindow) => Self::IconifyWindow,
            Some(WindowManipulationType::RefreshWindow) => Self::RefreshWindow,
            Some(WindowManipulationType::ResizeWindowInCharacters) => {
                Self::ResizeWindowInCharacters {
                    height: param1,
                    width: param2,
                }
            }
            None => Self::Unrecognized { function },
        }
    }
}

/// One decoded interactive command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a batch of input events to the pending input queue.
    WriteInput { events: InputEventBatch },
    /// Deliver one key event through the generic-key path (no interrupts).
    WriteCtrlKey { event: KeyEvent },
    /// Inject a string as synthesized keystrokes.
    WriteString { text: String },
    /// Perform a window-manipulation function.
    WindowManipulation { manipulation: WindowManipulation },
    /// Move the cursor to a 1-based terminal position.
    MoveCursor { row: TermRow, col: TermCol },
    /// Ask whether the input buffer accepts VT input directly.
    QueryVtInputEnabled,
    /// A terminal front-end claims the session gained or lost focus.
    FocusChanged { focused: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1, WindowManipulation::DeiconifyWindow; "function 1 deiconifies")]
    #[test_case(2, WindowManipulation::IconifyWindow; "function 2 iconifies")]
    #[test_case(7, WindowManipulation::RefreshWindow; "function 7 refreshes")]
    fn test_from_raw_parameterless_functions(function: u16, want: WindowManipulation) {
        assert_eq!(WindowManipulation::from_raw(function, None, None), want);
    }

    #[test]
    fn test_from_raw_resize_keeps_parameter_roles() {
        // Parameter 1 is height, parameter 2 is width.
        assert_eq!(
            WindowManipulation::from_raw(8, Some(25), Some(80)),
            WindowManipulation::ResizeWindowInCharacters {
                height: Some(25),
                width: Some(80),
            }
        );
    }

    #[test_case(0; "function 0")]
    #[test_case(3; "move window is not handled")]
    #[test_case(14; "report pixel size is not handled")]
    #[test_case(u16::MAX; "function max")]
    fn test_from_raw_unrecognized(function: u16) {
        assert_eq!(
            WindowManipulation::from_raw(function, Some(1), Some(2)),
            WindowManipulation::Unrecognized { function }
        );
    }
}
