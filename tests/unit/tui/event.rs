use super::*;
use crossterm::event::{KeyEventState, MouseEvent};

fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn uppercase_letters_normalize_to_shift() {
    let key = Key::from(key_event(
        KeyCode::Char('A'),
        KeyModifiers::NONE,
        KeyEventKind::Press,
    ));
    assert_eq!(key, Key::shift(KeyCode::Char('a')));
}

#[test]
fn releases_are_dropped() {
    let release = key_event(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(Key::from_event(&release), None);

    let press = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(Key::from_event(&press), Some(Key::ctrl(KeyCode::Char('c'))));
}

#[test]
fn left_click_reports_position() {
    let down = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 12,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(down.left_click(), Some((12, 4)));

    let right = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 12,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(right.left_click(), None);
    assert!(right.as_key().is_none());
}

#[test]
fn crossterm_events_convert() {
    let event = InputEvent::from(crossterm::event::Event::Resize(80, 24));
    assert!(matches!(event, InputEvent::Resize(80, 24)));

    let key = key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
    let event = InputEvent::from(crossterm::event::Event::Key(key));
    assert_eq!(event.as_key().map(|k| k.code), Some(KeyCode::Enter));
}
