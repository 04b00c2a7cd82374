use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::time::Duration;

use folio::ui::core::{EventHandler, EventType};

#[test]
fn test_key_presses_are_kept() {
    let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(matches!(EventHandler::convert(event), EventType::Key(_)));
}

#[test]
fn test_key_releases_are_dropped() {
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventHandler::convert(Event::Key(release)), EventType::Other));
}

#[test]
fn test_resize_and_focus_events() {
    assert!(matches!(EventHandler::convert(Event::Resize(80, 24)), EventType::Resize(80, 24)));
    assert!(matches!(EventHandler::convert(Event::FocusGained), EventType::Other));
}

#[test]
fn test_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(50));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(10)).tick_rate(),
        Duration::from_millis(10)
    );
}
