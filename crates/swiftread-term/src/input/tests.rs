use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swiftread_core::input::InputEvent;

use super::map_key;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn common_bindings_map_to_trainer_actions() {
    assert_eq!(map_key(press(KeyCode::Char(' '))), Some(InputEvent::PlayPause));
    assert_eq!(map_key(press(KeyCode::Enter)), Some(InputEvent::Select));
    assert_eq!(map_key(press(KeyCode::Esc)), Some(InputEvent::Back));
    assert_eq!(map_key(press(KeyCode::Char('+'))), Some(InputEvent::SpeedUp));
    assert_eq!(map_key(press(KeyCode::Char(']'))), Some(InputEvent::ChunkUp));
    assert_eq!(map_key(press(KeyCode::Char('e'))), Some(InputEvent::Edit));
    assert_eq!(map_key(press(KeyCode::Char('c'))), Some(InputEvent::ClearHistory));
    assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
}

#[test]
fn ctrl_c_always_quits() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(key), Some(InputEvent::Quit));
}

#[test]
fn releases_and_unbound_keys_are_ignored() {
    let mut release = press(KeyCode::Char(' '));
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(release), None);
    assert_eq!(map_key(press(KeyCode::Char('z'))), None);
}
