use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shortkey_core::{KeyboardEvent, PreventDefault};
use shortkey_engine::engine::char_key_code;

/// A terminal key press seen through the registry's event interface.
///
/// "Preventing the default" marks the key as consumed so the event loop
/// does not treat it as one of its own keys (Esc to quit).
#[derive(Debug)]
pub struct TermKey {
    code: String,
    modifiers: KeyModifiers,
    consumed: bool,
}

impl TermKey {
    /// `None` for keys with no physical key identifier (media keys, bare
    /// modifier presses...).
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        Some(Self {
            code: physical_code(event.code)?,
            modifiers: event.modifiers,
            consumed: false,
        })
    }

    pub fn consumed(&self) -> bool {
        self.consumed
    }
}

impl PreventDefault for TermKey {
    fn prevent_default(&mut self) {
        self.consumed = true;
    }
}

impl KeyboardEvent for TermKey {
    fn code(&self) -> &str {
        &self.code
    }

    fn shift_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn ctrl_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn alt_key(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    fn meta_key(&self) -> bool {
        self.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META)
    }
}

fn physical_code(code: KeyCode) -> Option<String> {
    let named = match code {
        KeyCode::Char(ch) => return char_key_code(ch),
        KeyCode::F(n) => return Some(format!("F{}", n)),
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        _ => return None,
    };
    Some(named.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn letters_map_to_key_codes() {
        let term = TermKey::from_event(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(term.code(), "KeyA");
        assert!(term.ctrl_key());
        assert!(!term.shift_key());

        let term = TermKey::from_event(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(term.code(), "KeyA");
        assert!(term.shift_key());
    }

    #[test]
    fn named_keys_map_to_dom_codes() {
        let term = TermKey::from_event(&key(KeyCode::Up, KeyModifiers::ALT)).unwrap();
        assert_eq!(term.code(), "ArrowUp");
        assert!(term.alt_key());

        let term = TermKey::from_event(&key(KeyCode::F(5), KeyModifiers::NONE)).unwrap();
        assert_eq!(term.code(), "F5");

        let term = TermKey::from_event(&key(KeyCode::Char('1'), KeyModifiers::NONE)).unwrap();
        assert_eq!(term.code(), "Digit1");
    }

    #[test]
    fn super_counts_as_meta() {
        let term = TermKey::from_event(&key(KeyCode::Char('s'), KeyModifiers::SUPER)).unwrap();
        assert!(term.meta_key());
        assert!(!term.ctrl_key());
    }

    #[test]
    fn unmapped_keys_are_skipped() {
        assert!(TermKey::from_event(&key(KeyCode::Null, KeyModifiers::NONE)).is_none());
        assert!(TermKey::from_event(&key(KeyCode::Char('é'), KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn prevent_default_consumes() {
        let mut term = TermKey::from_event(&key(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(!term.consumed());
        term.prevent_default();
        assert!(term.consumed());
    }
}
