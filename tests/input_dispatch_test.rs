//! Integration test: Input dispatch
//!
//! Raw platform events through the dispatcher, including held-key
//! suppression and terminals that never report key releases.

use flappy_pigeon::{InputDispatcher, InputType, Key, RawInput};

#[test]
fn test_repeated_key_down_yields_one_event() {
    let mut d = InputDispatcher::new();
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), Some(InputType::Flap));
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), None);
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), None);

    assert_eq!(d.dispatch(RawInput::KeyUp(Key::Space)), None);
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), Some(InputType::Flap));
}

#[test]
fn test_different_keys_are_independent() {
    let mut d = InputDispatcher::new();
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), Some(InputType::Flap));
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Up)), Some(InputType::Flap));
    assert_eq!(
        d.dispatch(RawInput::KeyDown(Key::Char('m'))),
        Some(InputType::Mute)
    );
    assert!(d.is_held(Key::Space) && d.is_held(Key::Up));
}

#[test]
fn test_pointer_and_touch_always_flap() {
    let mut d = InputDispatcher::new();
    for _ in 0..3 {
        assert_eq!(d.dispatch(RawInput::PointerDown), Some(InputType::Flap));
        assert_eq!(d.dispatch(RawInput::TouchStart), Some(InputType::Flap));
    }
}

#[test]
fn test_unmapped_keys_are_dropped() {
    let mut d = InputDispatcher::new();
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Char('x'))), None);
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Other)), None);
}

#[test]
fn test_without_release_events_every_press_counts() {
    let mut d = InputDispatcher::without_release_events();
    assert!(!d.tracks_release());
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), Some(InputType::Flap));
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Space)), Some(InputType::Flap));
}

#[test]
fn test_reset_releases_held_keys() {
    let mut d = InputDispatcher::new();
    d.dispatch(RawInput::KeyDown(Key::Enter));
    d.reset();
    assert!(!d.is_held(Key::Enter));
    assert_eq!(d.dispatch(RawInput::KeyDown(Key::Enter)), Some(InputType::Flap));
}
