use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Shell-level (handled in every mode)
    Quit,
    ToggleCollapse,
    OpenLocation,
    Back,
    Forward,
    FocusNext,

    // Routed to the focused region
    CursorUp,
    CursorDown,
    Submit,
    Escape,
    Backspace,
    InputChar(char),
    Paste(String),

    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) => map_key(key_event),
        Ok(Event::Mouse(mouse_event)) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Ok(Event::Paste(data)) => Some(TuiEvent::Paste(data)),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::Quit),
        // Ctrl+B folds/unfolds the side panel
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(TuiEvent::ToggleCollapse),
        // Ctrl+L opens the location prompt, like a browser's address bar
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::OpenLocation),
        (KeyModifiers::ALT, KeyCode::Left) => Some(TuiEvent::Back),
        (KeyModifiers::ALT, KeyCode::Right) => Some(TuiEvent::Forward),
        (_, KeyCode::Tab | KeyCode::BackTab) => Some(TuiEvent::FocusNext),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Some(TuiEvent::InputChar(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_shell_shortcuts() {
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('b'))),
            Some(TuiEvent::ToggleCollapse)
        );
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('l'))),
            Some(TuiEvent::OpenLocation)
        );
        assert_eq!(
            map_key(key(KeyModifiers::ALT, KeyCode::Left)),
            Some(TuiEvent::Back)
        );
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            map_key(key(KeyModifiers::NONE, KeyCode::Char('+'))),
            Some(TuiEvent::InputChar('+'))
        );
        assert_eq!(
            map_key(key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut release = key(KeyModifiers::NONE, KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
