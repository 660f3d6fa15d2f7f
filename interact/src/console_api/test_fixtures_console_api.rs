// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory recording [`ConsoleApi`] implementation for tests.
//!
//! Every mutation the dispatcher performs is recorded in a public field so
//! tests can assert on exactly what reached the "console". Failure injection
//! flags make the two fallible virtualized-I/O calls return errors on demand.

use super::{ConsoleApi, ConsoleApiError};
use crate::{
    coords::{BufferPos, Viewport},
    focus::{ProcessId, WindowHandle},
    input_events::{CodePage, InputEvent, InputEventBatch, KeyEvent, KeyState, VirtualKey},
};

/// A fake console: records everything, owns nothing real.
///
/// Defaults to a UTF-8, non-virtualized session with an 80x25 viewport at the
/// buffer origin; tests flip the fields they care about.
#[derive(Debug, Clone)]
pub struct FakeConsole {
    /// The pending input queue.
    pub queue: Vec<InputEvent>,
    pub code_page: CodePage,
    /// Last `show_window` argument, `None` if never called.
    pub window_shown: Option<bool>,
    pub redraw_all_count: usize,
    /// What `resize_window` reports to the dispatcher.
    pub resize_result: bool,
    /// Last `(width, height)` requested, `None` if never called.
    pub last_resize_request: Option<(i32, i32)>,
    pub viewport: Viewport,
    pub cursor_pos: Option<BufferPos>,
    pub cursor_has_moved: bool,
    /// Position recorded with the virtualized-I/O channel.
    pub tracked_cursor_pos: Option<BufferPos>,
    pub fail_cursor_tracking: bool,
    pub suppressed_repaints: usize,
    pub fail_suppress_resize_repaint: bool,
    pub vt_input_enabled: bool,
    pub virtual_session: bool,
    pub pseudo_window: Option<WindowHandle>,
    /// `(window, owner)` pairs recorded by "reparent".
    pub window_owners: Vec<(WindowHandle, WindowHandle)>,
    pub foreground: Option<WindowHandle>,
    /// `(window, pid)` ownership table.
    pub process_ids: Vec<(WindowHandle, ProcessId)>,
    pub has_focus: bool,
    /// Every value passed to `modify_console_process_focus`, in order.
    pub process_focus_notifications: Vec<bool>,
}

impl Default for FakeConsole {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            code_page: CodePage::UTF_8,
            window_shown: None,
            redraw_all_count: 0,
            resize_result: true,
            last_resize_request: None,
            viewport: Viewport::new(0, 0, 79, 24),
            cursor_pos: None,
            cursor_has_moved: false,
            tracked_cursor_pos: None,
            fail_cursor_tracking: false,
            suppressed_repaints: 0,
            fail_suppress_resize_repaint: false,
            vt_input_enabled: false,
            virtual_session: false,
            pseudo_window: None,
            window_owners: Vec::new(),
            foreground: None,
            process_ids: Vec::new(),
            has_focus: false,
            process_focus_notifications: Vec::new(),
        }
    }
}

impl FakeConsole {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A virtualized session whose pseudo window is owned by `owner_pid` while
    /// the real foreground window belongs to `foreground_pid`. This is the
    /// whole identity chain the focus validator walks.
    #[must_use]
    pub fn virtual_session_with_identity(owner_pid: u32, foreground_pid: u32) -> Self {
        let pseudo = WindowHandle(0x100);
        let owner = WindowHandle(0x200);
        let foreground = WindowHandle(0x300);
        Self {
            virtual_session: true,
            pseudo_window: Some(pseudo),
            window_owners: vec![(pseudo, owner)],
            foreground: Some(foreground),
            process_ids: vec![
                (owner, ProcessId(owner_pid)),
                (foreground, ProcessId(foreground_pid)),
            ],
            ..Self::default()
        }
    }

    /// Focus events currently sitting in the queue.
    #[must_use]
    pub fn queued_focus_events(&self) -> Vec<bool> {
        self.queue
            .iter()
            .filter_map(|event| match event {
                InputEvent::Focus { focused } => Some(*focused),
                _ => None,
            })
            .collect()
    }

    /// Replay the injected text represented by the queued key events: the
    /// character of every non-modifier key-down outside an alt-code run, plus
    /// the character deposited on each Alt release.
    #[must_use]
    pub fn replay_injected_text(&self) -> String {
        let mut text = String::new();
        for event in &self.queue {
            let InputEvent::Key(key_event) = event else {
                continue;
            };
            match key_event.state {
                KeyState::Pressed => {
                    if key_event.ch != '\0'
                        && !key_event.key.is_modifier()
                        && !key_event.modifiers.alt.is_pressed()
                    {
                        text.push(key_event.ch);
                    }
                }
                KeyState::Released => {
                    if key_event.key == VirtualKey::ALT && key_event.ch != '\0' {
                        text.push(key_event.ch);
                    }
                }
            }
        }
        text
    }
}

impl ConsoleApi for FakeConsole {
    fn write_input(&mut self, events: InputEventBatch) -> usize {
        let count = events.len();
        self.queue.extend(events);
        count
    }

    fn write_generic_key(&mut self, event: KeyEvent) {
        // Generic path: plain queue append, never an interrupt.
        self.queue.push(InputEvent::Key(event));
    }

    fn console_output_code_page(&self) -> CodePage { self.code_page }

    fn show_window(&mut self, show: bool) { self.window_shown = Some(show); }

    fn trigger_redraw_all(&mut self) { self.redraw_all_count += 1; }

    fn resize_window(&mut self, width: i32, height: i32) -> bool {
        self.last_resize_request = Some((width, height));
        if self.resize_result {
            // Mirror the host: a successful buffer resize posts a size-change
            // record into the input queue for clients to observe.
            self.queue.push(InputEvent::window_buffer_size(width, height));
        }
        self.resize_result
    }

    fn viewport(&self) -> Viewport { self.viewport }

    fn set_cursor_position(&mut self, pos: BufferPos) { self.cursor_pos = Some(pos); }

    fn set_cursor_has_moved(&mut self, has_moved: bool) {
        self.cursor_has_moved = has_moved;
    }

    fn is_vt_input_enabled(&self) -> bool { self.vt_input_enabled }

    fn is_virtual_session(&self) -> bool { self.virtual_session }

    fn pseudo_window(&self) -> Option<WindowHandle> { self.pseudo_window }

    fn window_owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        self.window_owners
            .iter()
            .find(|(child, _)| *child == window)
            .map(|(_, owner)| *owner)
    }

    fn foreground_window(&self) -> Option<WindowHandle> { self.foreground }

    fn window_process_id(&self, window: WindowHandle) -> Option<ProcessId> {
        self.process_ids
            .iter()
            .find(|(handle, _)| *handle == window)
            .map(|(_, pid)| *pid)
    }

    fn set_has_focus(&mut self, focused: bool) { self.has_focus = focused; }

    fn modify_console_process_focus(&mut self, focused: bool) {
        self.process_focus_notifications.push(focused);
    }

    fn track_cursor_position(&mut self, pos: BufferPos) -> Result<(), ConsoleApiError> {
        if self.fail_cursor_tracking {
            return Err(ConsoleApiError::CursorTracking);
        }
        self.tracked_cursor_pos = Some(pos);
        Ok(())
    }

    fn suppress_resize_repaint(&mut self) -> Result<(), ConsoleApiError> {
        if self.fail_suppress_resize_repaint {
            return Err(ConsoleApiError::SuppressResizeRepaint);
        }
        self.suppressed_repaints += 1;
        Ok(())
    }
}
