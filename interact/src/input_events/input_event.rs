// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The console input-queue element type.
//!
//! Everything the dispatcher feeds into the pending input queue is one of these
//! variants. Key events come from the caller or from keystroke synthesis; focus
//! events are enqueued by a focus-change dispatch; window-buffer-size events are
//! posted by the host when the screen buffer is resized so clients polling input
//! learn the new dimensions.

use super::KeyEvent;
use smallvec::SmallVec;

/// Stack-allocated batch of input events. Spills to the heap past
/// [`INPUT_EVENT_BATCH_SIZE`] - most dispatch calls move only a handful of
/// events.
pub type InputEventBatch = SmallVec<[InputEvent; INPUT_EVENT_BATCH_SIZE]>;
pub const INPUT_EVENT_BATCH_SIZE: usize = 8;

/// One record in the console's pending input queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A synthetic or forwarded keystroke.
    Key(KeyEvent),
    /// Terminal focus transition notification. Carries the value the terminal
    /// *claimed*; see the focus security validator for why the applied focus
    /// state can differ.
    Focus { focused: bool },
    /// Screen buffer dimensions changed. Dimensions are clamped to
    /// `0..=i16::MAX` in the queue representation, matching the wire format
    /// clients read these records in.
    WindowBufferSize { width: i32, height: i32 },
}

impl InputEvent {
    /// Build a [`InputEvent::WindowBufferSize`], clamping each dimension to
    /// `0..=i16::MAX`.
    #[must_use]
    pub fn window_buffer_size(width: i32, height: i32) -> Self {
        Self::WindowBufferSize {
            width: width.clamp(0, i32::from(i16::MAX)),
            height: height.clamp(0, i32::from(i16::MAX)),
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self { Self::Key(event) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_events::{ModifierKeys, VirtualKey};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_key_event_converts_into_queue_element() {
        let key = KeyEvent::pressed(VirtualKey::letter('x'), 'x', ModifierKeys::none());
        assert_eq!(InputEvent::from(key), InputEvent::Key(key));
    }

    #[test_case(80, 25, 80, 25; "in range passes through")]
    #[test_case(-5, 25, 0, 25; "negative width floors at zero")]
    #[test_case(80, -1, 80, 0; "negative height floors at zero")]
    #[test_case(1_000_000, 25, 32_767, 25; "oversized width caps at i16 max")]
    fn test_window_buffer_size_clamps(w: i32, h: i32, want_w: i32, want_h: i32) {
        assert_eq!(
            InputEvent::window_buffer_size(w, h),
            InputEvent::WindowBufferSize {
                width: want_w,
                height: want_h
            }
        );
    }
}
