// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String-to-keystroke synthesis.
//!
//! Converts a character (plus the active output code page) into the minimal
//! ordered key-down/key-up sequence that would produce that character if typed:
//!
//! ```text
//! 'a'  →  a↓ a↑
//! 'A'  →  shift↓ A↓ A↑ shift↑
//! '€'  →  alt↓ numpad-run(digits of code) alt↑(carrying '€')
//! ```
//!
//! Characters a US-layout keyboard produces directly (printable ASCII plus
//! carriage return, line feed, tab, backspace, escape) map to their virtual key,
//! wrapped in a shift press/release when the character lives on the shifted
//! plane. Everything else becomes an Alt+numpad run - Alt held, the decimal
//! digits of the character's code typed on the keypad, then Alt released with
//! the final character deposited on the release event, the order a human types
//! an alt-code.
//!
//! The code page decides the digits: a character representable as a single byte
//! in the active code page uses that byte's value; otherwise (UTF-8 and any
//! unrecognized code page) the Unicode scalar value is used.
//!
//! Replay property: walking a synthesized sequence in order - taking the
//! character of every non-modifier key-down outside an alt run, and the
//! character deposited on each Alt release - reconstructs the source string
//! exactly. The conformance tests pin this.

use super::{KeyEvent, ModifierKeys, VirtualKey};
use smallvec::SmallVec;

/// Stack-allocated run of key events for one or a few characters.
pub type KeyEventBatch = SmallVec<[KeyEvent; KEY_EVENT_BATCH_SIZE]>;
pub const KEY_EVENT_BATCH_SIZE: usize = 8;

/// The character-encoding context used to synthesize keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePage(pub u32);

impl CodePage {
    pub const UTF_8: Self = Self(65_001);
    pub const WINDOWS_1252: Self = Self(1_252);

    /// The single-byte encoding of `ch` in this code page, when it has one.
    ///
    /// Windows-1252 is treated as its Latin-1 superset (the handful of 0x80-0x9F
    /// remappings are host keyboard-layout territory, not dispatch territory).
    /// UTF-8 and unrecognized code pages report `None` so synthesis falls back
    /// to the Unicode scalar value.
    #[must_use]
    pub fn single_byte_value(self, ch: char) -> Option<u8> {
        if self == Self::WINDOWS_1252 && (ch as u32) <= 0xFF {
            #[allow(clippy::cast_possible_truncation)]
            return Some(ch as u32 as u8);
        }
        None
    }
}

/// US-layout mapping: the virtual key producing `ch`, and whether shift is
/// required. `None` for anything the layout cannot type directly.
#[must_use]
pub(crate) fn us_layout_key(ch: char) -> Option<(VirtualKey, bool)> {
    let mapping = match ch {
        '\r' | '\n' => (VirtualKey::RETURN, false),
        '\t' => (VirtualKey::TAB, false),
        '\u{8}' => (VirtualKey::BACKSPACE, false),
        '\u{1b}' => (VirtualKey::ESCAPE, false),
        ' ' => (VirtualKey::SPACE, false),
        'a'..='z' => (VirtualKey::letter(ch), false),
        'A'..='Z' => (VirtualKey::letter(ch), true),
        '0'..='9' => (VirtualKey::digit(ch), false),
        '!' => (VirtualKey::digit('1'), true),
        '@' => (VirtualKey::digit('2'), true),
        '#' => (VirtualKey::digit('3'), true),
        '$' => (VirtualKey::digit('4'), true),
        '%' => (VirtualKey::digit('5'), true),
        '^' => (VirtualKey::digit('6'), true),
        '&' => (VirtualKey::digit('7'), true),
        '*' => (VirtualKey::digit('8'), true),
        '(' => (VirtualKey::digit('9'), true),
        ')' => (VirtualKey::digit('0'), true),
        ';' => (VirtualKey::OEM_1, false),
        ':' => (VirtualKey::OEM_1, true),
        '=' => (VirtualKey::OEM_PLUS, false),
        '+' => (VirtualKey::OEM_PLUS, true),
        ',' => (VirtualKey::OEM_COMMA, false),
        '<' => (VirtualKey::OEM_COMMA, true),
        '-' => (VirtualKey::OEM_MINUS, false),
        '_' => (VirtualKey::OEM_MINUS, true),
        '.' => (VirtualKey::OEM_PERIOD, false),
        '>' => (VirtualKey::OEM_PERIOD, true),
        '/' => (VirtualKey::OEM_2, false),
        '?' => (VirtualKey::OEM_2, true),
        '`' => (VirtualKey::OEM_3, false),
        '~' => (VirtualKey::OEM_3, true),
        '[' => (VirtualKey::OEM_4, false),
        '{' => (VirtualKey::OEM_4, true),
        '\\' => (VirtualKey::OEM_5, false),
        '|' => (VirtualKey::OEM_5, true),
        ']' => (VirtualKey::OEM_6, false),
        '}' => (VirtualKey::OEM_6, true),
        '\'' => (VirtualKey::OEM_7, false),
        '"' => (VirtualKey::OEM_7, true),
        _ => return None,
    };
    Some(mapping)
}

/// Synthesize the ordered key events that would produce `ch` if typed.
#[must_use]
pub fn char_to_key_events(ch: char, code_page: CodePage) -> KeyEventBatch {
    let mut events = KeyEventBatch::new();

    if let Some((key, needs_shift)) = us_layout_key(ch) {
        let modifiers = if needs_shift {
            ModifierKeys::shift_only()
        } else {
            ModifierKeys::none()
        };

        if needs_shift {
            events.push(KeyEvent::pressed(
                VirtualKey::SHIFT,
                '\0',
                ModifierKeys::shift_only(),
            ));
        }
        events.push(KeyEvent::pressed(key, ch, modifiers));
        events.push(KeyEvent::released(key, ch, modifiers));
        if needs_shift {
            events.push(KeyEvent::released(
                VirtualKey::SHIFT,
                '\0',
                ModifierKeys::none(),
            ));
        }
        return events;
    }

    synthesize_alt_numpad_run(ch, code_page, &mut events);
    events
}

/// Alt+numpad synthesis for characters the layout cannot type directly.
fn synthesize_alt_numpad_run(ch: char, code_page: CodePage, events: &mut KeyEventBatch) {
    let code_value = match code_page.single_byte_value(ch) {
        Some(byte) => u32::from(byte),
        None => ch as u32,
    };

    events.push(KeyEvent::pressed(
        VirtualKey::ALT,
        '\0',
        ModifierKeys::alt_only(),
    ));

    // Decimal digits, most significant first.
    let mut digits: SmallVec<[u8; 10]> = SmallVec::new();
    let mut remaining = code_value;
    loop {
        #[allow(clippy::cast_possible_truncation)]
        digits.push((remaining % 10) as u8);
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }
    for &digit in digits.iter().rev() {
        let key = VirtualKey::numpad_digit(digit);
        events.push(KeyEvent::pressed(key, '\0', ModifierKeys::alt_only()));
        events.push(KeyEvent::released(key, '\0', ModifierKeys::alt_only()));
    }

    // The character materializes when Alt is released.
    events.push(KeyEvent::released(VirtualKey::ALT, ch, ModifierKeys::none()));
}

/// Synthesize key events for an entire string, preserving character order and
/// intra-character event order.
#[must_use]
pub fn string_to_key_events(text: &str, code_page: CodePage) -> KeyEventBatch {
    let mut events = KeyEventBatch::new();
    for ch in text.chars() {
        events.extend(char_to_key_events(ch, code_page));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_events::KeyState;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_lowercase_letter_is_bare_press_release_pair() {
        let events = char_to_key_events('a', CodePage::UTF_8);
        assert_eq!(
            events.as_slice(),
            &[
                KeyEvent::pressed(VirtualKey::letter('a'), 'a', ModifierKeys::none()),
                KeyEvent::released(VirtualKey::letter('a'), 'a', ModifierKeys::none()),
            ]
        );
    }

    #[test]
    fn test_uppercase_letter_is_wrapped_in_shift() {
        let events = char_to_key_events('A', CodePage::UTF_8);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].key, VirtualKey::SHIFT);
        assert_eq!(events[0].state, KeyState::Pressed);
        assert_eq!(
            events[1],
            KeyEvent::pressed(VirtualKey::letter('A'), 'A', ModifierKeys::shift_only())
        );
        assert_eq!(
            events[2],
            KeyEvent::released(VirtualKey::letter('A'), 'A', ModifierKeys::shift_only())
        );
        assert_eq!(events[3].key, VirtualKey::SHIFT);
        assert_eq!(events[3].state, KeyState::Released);
    }

    #[test_case('!', VirtualKey::digit('1'); "bang is shift 1")]
    #[test_case(':', VirtualKey::OEM_1; "colon is shift semicolon")]
    #[test_case('"', VirtualKey::OEM_7; "double quote is shift apostrophe")]
    fn test_shifted_punctuation(ch: char, want_key: VirtualKey) {
        let events = char_to_key_events(ch, CodePage::UTF_8);
        assert_eq!(events.len(), 4);
        assert_eq!(events[1].key, want_key);
        assert!(events[1].modifiers.shift.is_pressed());
    }

    #[test]
    fn test_non_keyboard_char_becomes_alt_numpad_run() {
        // U+00E9 é = 233: alt↓, (2↓2↑)(3↓3↑)(3↓3↑), alt↑ carrying é.
        let events = char_to_key_events('é', CodePage::UTF_8);
        assert_eq!(events.len(), 2 + 3 * 2);

        assert_eq!(events[0].key, VirtualKey::ALT);
        assert_eq!(events[0].state, KeyState::Pressed);

        let digit_keys: Vec<VirtualKey> = events[1..7]
            .iter()
            .filter(|ev| ev.is_pressed())
            .map(|ev| ev.key)
            .collect();
        assert_eq!(
            digit_keys,
            vec![
                VirtualKey::numpad_digit(2),
                VirtualKey::numpad_digit(3),
                VirtualKey::numpad_digit(3),
            ]
        );

        let alt_up = events.last().unwrap();
        assert_eq!(alt_up.key, VirtualKey::ALT);
        assert_eq!(alt_up.state, KeyState::Released);
        assert_eq!(alt_up.ch, 'é');
    }

    #[test]
    fn test_code_page_selects_alt_code_value() {
        assert_eq!(CodePage::WINDOWS_1252.single_byte_value('é'), Some(233));
        assert_eq!(CodePage::WINDOWS_1252.single_byte_value('€'), None);
        assert_eq!(CodePage::UTF_8.single_byte_value('é'), None);

        // '€' has no single-byte value, so its alt-code run types the Unicode
        // scalar 8364: four numpad digit pairs.
        let events = char_to_key_events('€', CodePage::WINDOWS_1252);
        let digit_count = events
            .iter()
            .filter(|ev| ev.is_pressed() && ev.key != VirtualKey::ALT)
            .count();
        assert_eq!(digit_count, 4);
    }

    #[test]
    fn test_string_synthesis_preserves_order() {
        let events = string_to_key_events("Hi", CodePage::UTF_8);
        // 'H' = 4 events (shift-wrapped), 'i' = 2 events.
        assert_eq!(events.len(), 6);
        assert_eq!(events[1].ch, 'H');
        assert_eq!(events[4].ch, 'i');
    }

    #[test]
    fn test_empty_string_synthesizes_nothing() {
        assert!(string_to_key_events("", CodePage::UTF_8).is_empty());
    }

    #[test]
    fn test_control_chars_map_to_their_keys() {
        let events = char_to_key_events('\r', CodePage::UTF_8);
        assert_eq!(events[0].key, VirtualKey::RETURN);
        let events = char_to_key_events('\t', CodePage::UTF_8);
        assert_eq!(events[0].key, VirtualKey::TAB);
        let events = char_to_key_events('\u{1b}', CodePage::UTF_8);
        assert_eq!(events[0].key, VirtualKey::ESCAPE);
    }
}
