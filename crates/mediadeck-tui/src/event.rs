//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                 |
//! |-------------------------|-----------------------|
//! | `q`, `Ctrl+c`           | `Quit`                |
//! | `↑` / `k`               | `Nav(Up)`             |
//! | `↓` / `j`               | `Nav(Down)`           |
//! | `Enter`                 | `Activate`            |
//! | `Backspace`             | `Back`                |
//! | `d`                     | `ToggleDiagnostics`   |
//! | `x`                     | `CloseDiagnostics`    |
//! | `?`                     | `Help`                |
//! | `Escape`                | `Escape`              |
//! | terminal resize         | `Resize(w, h)`        |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Move the card selection.
    Nav(Direction),
    /// Activate (click) the selected card.
    Activate,
    /// Return to the previous location.
    Back,
    /// Expand or collapse the diagnostics overlay body.
    ToggleDiagnostics,
    /// Close the diagnostics overlay for the rest of the session.
    CloseDiagnostics,
    Help,
    Escape,
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, key releases, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(AppEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::Nav(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::Nav(Direction::Down)),
        KeyCode::Enter => Some(AppEvent::Activate),
        KeyCode::Backspace => Some(AppEvent::Back),
        KeyCode::Char('d') => Some(AppEvent::ToggleDiagnostics),
        KeyCode::Char('x') => Some(AppEvent::CloseDiagnostics),
        KeyCode::Char('?') => Some(AppEvent::Help),
        KeyCode::Esc => Some(AppEvent::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppEvent::Quit)]
    #[case::up_arrow(KeyCode::Up, AppEvent::Nav(Direction::Up))]
    #[case::up_vim(KeyCode::Char('k'), AppEvent::Nav(Direction::Up))]
    #[case::down_arrow(KeyCode::Down, AppEvent::Nav(Direction::Down))]
    #[case::down_vim(KeyCode::Char('j'), AppEvent::Nav(Direction::Down))]
    #[case::activate(KeyCode::Enter, AppEvent::Activate)]
    #[case::back(KeyCode::Backspace, AppEvent::Back)]
    #[case::toggle_diagnostics(KeyCode::Char('d'), AppEvent::ToggleDiagnostics)]
    #[case::close_diagnostics(KeyCode::Char('x'), AppEvent::CloseDiagnostics)]
    #[case::help(KeyCode::Char('?'), AppEvent::Help)]
    #[case::escape(KeyCode::Esc, AppEvent::Escape)]
    fn maps_bound_keys(#[case] code: KeyCode, #[case] expected: AppEvent) {
        assert_eq!(to_app_event(press(code)), Some(expected));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(to_app_event(Event::Key(key)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(to_app_event(ev), Some(AppEvent::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(to_app_event(press(KeyCode::Char('z'))), None);
        assert_eq!(to_app_event(Event::FocusGained), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(to_app_event(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24)));
    }
}
