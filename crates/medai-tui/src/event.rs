//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use medai_app::message::Message;
use medai_app::InputKey;
use medai_core::prelude::*;
use std::time::Duration;

/// Poll interval; a timeout produces a `Tick` for animations and toasts
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Ctrl on Linux/Windows, Cmd (Super) on macOS terminals that report it
fn has_mod(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// Convert crossterm KeyEvent to InputKey
///
/// Terminals without keyboard enhancement send Ctrl+Enter as a line feed,
/// which crossterm reports as Ctrl+J.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::EnterMod)
        }
        KeyCode::Char(c) if has_mod(&key) => Some(InputKey::CharCtrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter if has_mod(&key) => Some(InputKey::EnterMod),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Convert a terminal event into a message, if it carries one
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Paste(text) => Some(Message::Paste(text)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if event::poll(POLL_INTERVAL)? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use medai_app::handler::{handle_key, update};
    use medai_app::AppState;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_ctrl_and_super_map_to_char_ctrl() {
        let ctrl = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        let cmd = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        assert_eq!(key_event_to_input(ctrl), Some(InputKey::CharCtrl('k')));
        assert_eq!(key_event_to_input(cmd), Some(InputKey::CharCtrl('k')));
    }

    #[test]
    fn test_mod_enter() {
        let plain = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL);
        let cmd = KeyEvent::new(KeyCode::Enter, KeyModifiers::SUPER);
        assert_eq!(key_event_to_input(plain), Some(InputKey::Enter));
        assert_eq!(key_event_to_input(ctrl), Some(InputKey::EnterMod));
        assert_eq!(key_event_to_input(cmd), Some(InputKey::EnterMod));
    }

    #[test]
    fn test_legacy_ctrl_enter_is_mod_enter() {
        let line_feed = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(line_feed), Some(InputKey::EnterMod));
    }

    #[test]
    fn test_legacy_ctrl_enter_classifies_while_editing() {
        let mut state = AppState::new();
        update(&mut state, Message::StartEditing);
        update(&mut state, Message::SetInputText("Estudio de cohorte".into()));

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        let input = key_event_to_input(key).unwrap();

        assert!(matches!(
            handle_key(&state, input),
            Some(Message::TriggerClassify)
        ));
    }

    #[test]
    fn test_question_mark_with_shift_is_plain_char() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('?')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(InputKey::PageUp)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
            Some(InputKey::End)
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_paste_event_becomes_paste_message() {
        let msg = event_to_message(Event::Paste("abstract".into()));
        assert!(matches!(msg, Some(Message::Paste(ref t)) if t == "abstract"));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(event_to_message(Event::Key(key)).is_none());
    }
}
