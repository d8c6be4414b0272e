//! Key events understood by the router
//!
//! Raw key codes follow the DOM `keyCode` numbering so hosts embedding the
//! editor in a web view can pass them through unchanged. Terminal hosts
//! translate crossterm events with [`EditorEvent::from_crossterm`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const KEY_TAB: u32 = 9;
pub const KEY_ENTER: u32 = 13;
pub const KEY_SHIFT: u32 = 16;
pub const KEY_CTRL: u32 = 17;
pub const KEY_ALT: u32 = 18;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_UP: u32 = 38;
pub const KEY_DOWN: u32 = 40;
pub const KEY_META_LEFT: u32 = 91;
pub const KEY_META_RIGHT: u32 = 93;

const KEY_BACKSPACE: u32 = 8;
const KEY_END: u32 = 35;
const KEY_HOME: u32 = 36;
const KEY_LEFT: u32 = 37;
const KEY_RIGHT: u32 = 39;
const KEY_DELETE: u32 = 46;

/// A key event, classified for routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Escape
    Cancel,
    /// Shift, Ctrl, Alt or Meta pressed on its own
    ShowAllModifier,
    Tab { shift: bool },
    Enter { shift: bool, meta: bool },
    Up { shift: bool },
    Down { shift: bool },
    /// Any other key, with its raw code
    OtherKey(u32),
}

impl EditorEvent {
    /// Classify a raw key code
    pub fn from_key_code(code: u32, shift: bool, meta: bool) -> Self {
        match code {
            KEY_TAB => EditorEvent::Tab { shift },
            KEY_ENTER => EditorEvent::Enter { shift, meta },
            KEY_ESCAPE => EditorEvent::Cancel,
            KEY_UP => EditorEvent::Up { shift },
            KEY_DOWN => EditorEvent::Down { shift },
            KEY_SHIFT | KEY_CTRL | KEY_ALT | KEY_META_LEFT | KEY_META_RIGHT => {
                EditorEvent::ShowAllModifier
            }
            other => EditorEvent::OtherKey(other),
        }
    }

    /// Classify a terminal key event
    ///
    /// Terminals cannot report a Cmd key, so Ctrl, Alt and Super on Enter
    /// all count as meta. Bare modifier presses are only reported when the
    /// terminal has keyboard enhancement enabled.
    pub fn from_crossterm(event: &KeyEvent) -> Self {
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let meta = event.modifiers.intersects(
            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
        );

        match event.code {
            KeyCode::Esc => EditorEvent::Cancel,
            KeyCode::Modifier(_) => EditorEvent::ShowAllModifier,
            KeyCode::Tab => EditorEvent::Tab { shift },
            KeyCode::BackTab => EditorEvent::Tab { shift: true },
            KeyCode::Enter => EditorEvent::Enter { shift, meta },
            KeyCode::Up => EditorEvent::Up { shift },
            KeyCode::Down => EditorEvent::Down { shift },
            KeyCode::Backspace => EditorEvent::OtherKey(KEY_BACKSPACE),
            KeyCode::Delete => EditorEvent::OtherKey(KEY_DELETE),
            KeyCode::Left => EditorEvent::OtherKey(KEY_LEFT),
            KeyCode::Right => EditorEvent::OtherKey(KEY_RIGHT),
            KeyCode::Home => EditorEvent::OtherKey(KEY_HOME),
            KeyCode::End => EditorEvent::OtherKey(KEY_END),
            KeyCode::Char(c) => EditorEvent::OtherKey(c as u32),
            _ => EditorEvent::OtherKey(0),
        }
    }

    /// Keys whose release must not rebuild the completion session
    pub fn keeps_completion(&self) -> bool {
        matches!(
            self,
            EditorEvent::Tab { .. } | EditorEvent::Cancel | EditorEvent::ShowAllModifier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::ModifierKeyCode;

    #[test]
    fn test_key_code_contract() {
        assert_eq!(
            EditorEvent::from_key_code(9, true, false),
            EditorEvent::Tab { shift: true }
        );
        assert_eq!(
            EditorEvent::from_key_code(13, false, true),
            EditorEvent::Enter {
                shift: false,
                meta: true
            }
        );
        assert_eq!(EditorEvent::from_key_code(27, false, false), EditorEvent::Cancel);
        assert_eq!(
            EditorEvent::from_key_code(38, false, false),
            EditorEvent::Up { shift: false }
        );
        assert_eq!(
            EditorEvent::from_key_code(40, true, false),
            EditorEvent::Down { shift: true }
        );
        for code in [16, 17, 18, 91, 93] {
            assert_eq!(
                EditorEvent::from_key_code(code, false, false),
                EditorEvent::ShowAllModifier
            );
        }
        assert_eq!(
            EditorEvent::from_key_code(65, false, false),
            EditorEvent::OtherKey(65)
        );
    }

    #[test]
    fn test_from_crossterm() {
        let tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            EditorEvent::from_crossterm(&tab),
            EditorEvent::Tab { shift: true }
        );

        let force = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(
            EditorEvent::from_crossterm(&force),
            EditorEvent::Enter {
                shift: false,
                meta: true
            }
        );

        let shift = KeyEvent::new(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::SHIFT,
        );
        assert_eq!(
            EditorEvent::from_crossterm(&shift),
            EditorEvent::ShowAllModifier
        );

        let letter = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);
        assert_eq!(
            EditorEvent::from_crossterm(&letter),
            EditorEvent::OtherKey('m' as u32)
        );
    }

    #[test]
    fn test_keeps_completion() {
        assert!(EditorEvent::Tab { shift: false }.keeps_completion());
        assert!(EditorEvent::Cancel.keeps_completion());
        assert!(EditorEvent::ShowAllModifier.keeps_completion());
        assert!(!EditorEvent::OtherKey(65).keeps_completion());
        assert!(
            !EditorEvent::Enter {
                shift: false,
                meta: false
            }
            .keeps_completion()
        );
    }
}
