use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal input delivered through the
/// [`terminal_events`](crate::terminal::terminal_events) subscription.
///
/// Variants wrap crossterm payloads unchanged so widgets can match on key
/// codes, modifiers and mouse positions directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event (motion, press, release, scroll).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// The key event, if this is a key press or repeat. Releases are dropped
    /// so a single physical press never activates a trigger twice.
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
            _ => None,
        }
    }

    /// The mouse event, if any.
    pub fn mouse(&self) -> Option<MouseEvent> {
        match self {
            TerminalEvent::Mouse(mouse) => Some(*mouse),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        use crossterm::event::Event;
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::FocusGained => TerminalEvent::FocusGained,
            Event::FocusLost => TerminalEvent::FocusLost,
            Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEventKind};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn release_is_not_a_press() {
        assert!(TerminalEvent::Key(key(KeyEventKind::Press)).key_press().is_some());
        assert!(TerminalEvent::Key(key(KeyEventKind::Repeat)).key_press().is_some());
        assert!(TerminalEvent::Key(key(KeyEventKind::Release)).key_press().is_none());
    }

    #[test]
    fn mouse_accessor() {
        let ev = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(TerminalEvent::Mouse(ev).mouse(), Some(ev));
        assert_eq!(TerminalEvent::FocusLost.mouse(), None);
    }
}
