// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Synthetic key event types.
//!
//! These model the host's input-queue key record: a virtual key code, the
//! character the keystroke produces (NUL when none), a press/release flag, a
//! repeat count, and the modifier-key state at the time of the event.
//!
//! Ownership contract: key events are created by the keystroke synthesizer (or
//! by the caller) and moved into the input queue. The dispatcher never retains
//! them.

use std::fmt::Display;

/// A Win32-style virtual key code.
///
/// Only the keys the keystroke synthesizer emits get named constants; anything
/// else can be constructed from its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const RETURN: Self = Self(0x0D);
    pub const SHIFT: Self = Self(0x10);
    pub const CONTROL: Self = Self(0x11);
    /// `VK_MENU`, i.e. the Alt key.
    pub const ALT: Self = Self(0x12);
    pub const ESCAPE: Self = Self(0x1B);
    pub const SPACE: Self = Self(0x20);

    pub const OEM_1: Self = Self(0xBA); // ;:
    pub const OEM_PLUS: Self = Self(0xBB); // =+
    pub const OEM_COMMA: Self = Self(0xBC); // ,<
    pub const OEM_MINUS: Self = Self(0xBD); // -_
    pub const OEM_PERIOD: Self = Self(0xBE); // .>
    pub const OEM_2: Self = Self(0xBF); // /?
    pub const OEM_3: Self = Self(0xC0); // `~
    pub const OEM_4: Self = Self(0xDB); // [{
    pub const OEM_5: Self = Self(0xDC); // \|
    pub const OEM_6: Self = Self(0xDD); // ]}
    pub const OEM_7: Self = Self(0xDE); // '"

    /// Virtual key for a letter key (`'a'..='z'` or `'A'..='Z'`).
    ///
    /// Letter virtual keys are the uppercase ASCII values.
    #[must_use]
    pub const fn letter(ch: char) -> Self {
        Self(ch.to_ascii_uppercase() as u16)
    }

    /// Virtual key for a digit key on the main row (`'0'..='9'`).
    #[must_use]
    pub const fn digit(ch: char) -> Self { Self(ch as u16) }

    /// Virtual key for a numeric keypad digit (`VK_NUMPAD0` + digit).
    #[must_use]
    pub const fn numpad_digit(digit: u8) -> Self { Self(0x60 + digit as u16) }

    #[must_use]
    pub const fn as_u16(self) -> u16 { self.0 }

    /// Whether this key is itself a modifier (shift, ctrl, alt).
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(self.0, 0x10 | 0x11 | 0x12)
    }
}

impl Display for VirtualKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VK(0x{:02X})", self.0)
    }
}

/// Press/release flag of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

/// State of a single modifier key at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierState {
    Pressed,
    #[default]
    NotPressed,
}

impl ModifierState {
    #[must_use]
    pub const fn is_pressed(self) -> bool { matches!(self, Self::Pressed) }
}

/// Modifier-key state carried by every key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierKeys {
    pub shift: ModifierState,
    pub ctrl: ModifierState,
    pub alt: ModifierState,
}

impl ModifierKeys {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            shift: ModifierState::NotPressed,
            ctrl: ModifierState::NotPressed,
            alt: ModifierState::NotPressed,
        }
    }

    #[must_use]
    pub const fn shift_only() -> Self {
        Self {
            shift: ModifierState::Pressed,
            ctrl: ModifierState::NotPressed,
            alt: ModifierState::NotPressed,
        }
    }

    #[must_use]
    pub const fn ctrl_only() -> Self {
        Self {
            shift: ModifierState::NotPressed,
            ctrl: ModifierState::Pressed,
            alt: ModifierState::NotPressed,
        }
    }

    #[must_use]
    pub const fn alt_only() -> Self {
        Self {
            shift: ModifierState::NotPressed,
            ctrl: ModifierState::NotPressed,
            alt: ModifierState::Pressed,
        }
    }
}

/// A synthetic keystroke headed for the console's input queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: VirtualKey,
    /// The character this keystroke produces; `'\0'` when it produces none
    /// (modifier presses, numpad digits inside an alt-code run).
    pub ch: char,
    pub state: KeyState,
    pub repeat: u16,
    pub modifiers: ModifierKeys,
}

impl KeyEvent {
    #[must_use]
    pub const fn pressed(key: VirtualKey, ch: char, modifiers: ModifierKeys) -> Self {
        Self {
            key,
            ch,
            state: KeyState::Pressed,
            repeat: 1,
            modifiers,
        }
    }

    #[must_use]
    pub const fn released(key: VirtualKey, ch: char, modifiers: ModifierKeys) -> Self {
        Self {
            key,
            ch,
            state: KeyState::Released,
            repeat: 1,
            modifiers,
        }
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool { matches!(self.state, KeyState::Pressed) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_letter_and_digit_virtual_keys() {
        assert_eq!(VirtualKey::letter('a'), VirtualKey(0x41));
        assert_eq!(VirtualKey::letter('Z'), VirtualKey(0x5A));
        assert_eq!(VirtualKey::digit('0'), VirtualKey(0x30));
        assert_eq!(VirtualKey::digit('9'), VirtualKey(0x39));
        assert_eq!(VirtualKey::numpad_digit(0), VirtualKey(0x60));
        assert_eq!(VirtualKey::numpad_digit(9), VirtualKey(0x69));
    }

    #[test]
    fn test_modifier_detection() {
        assert!(VirtualKey::SHIFT.is_modifier());
        assert!(VirtualKey::CONTROL.is_modifier());
        assert!(VirtualKey::ALT.is_modifier());
        assert!(!VirtualKey::letter('c').is_modifier());
        assert!(!VirtualKey::RETURN.is_modifier());
    }

    #[test]
    fn test_event_constructors() {
        let down = KeyEvent::pressed(VirtualKey::letter('c'), 'c', ModifierKeys::none());
        assert!(down.is_pressed());
        assert_eq!(down.repeat, 1);

        let up = KeyEvent::released(VirtualKey::letter('c'), 'c', ModifierKeys::none());
        assert_eq!(up.state, KeyState::Released);
    }
}
