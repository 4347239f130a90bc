use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events published by the runtime's event bus.
///
/// Every subscription created with
/// [`terminal_events`](crate::subscriptions::terminal_events) or
/// [`pointer_events`](crate::subscriptions::pointer_events) receives its own
/// copy of each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
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
    /// The key event, if this is a key *press* (repeats and releases are
    /// filtered out, since Windows terminals report both).
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(k) if k.kind != KeyEventKind::Release => Some(*k),
            _ => None,
        }
    }

    /// The mouse event, if this is one.
    pub fn mouse(&self) -> Option<MouseEvent> {
        match self {
            TerminalEvent::Mouse(m) => Some(*m),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEventKind,
    };

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn key_press_filters_releases() {
        let press = TerminalEvent::Key(key_with_kind(KeyEventKind::Press));
        let release = TerminalEvent::Key(key_with_kind(KeyEventKind::Release));
        assert!(press.key_press().is_some());
        assert!(release.key_press().is_none());
        assert!(press.mouse().is_none());
    }

    #[test]
    fn mouse_accessor() {
        let ev = TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(ev.mouse().map(|m| (m.column, m.row)), Some((3, 4)));
        assert!(ev.key_press().is_none());
    }
}
