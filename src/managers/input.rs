//! Raw input → semantic game input.
//!
//! Pointer, touch and key events from any platform are reduced to
//! [`InputType`]. Held keys are tracked so auto-repeat key-downs are
//! dropped until the matching key-up arrives.

use std::collections::HashSet;

/// The only inputs the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Flap,
    Pause,
    Mute,
}

/// Platform-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Up,
    Enter,
    Char(char),
    Other,
}

impl Key {
    /// Letter keys compare case-insensitively, so a press and its release
    /// match even if Shift changed in between.
    fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_lowercase().next().unwrap_or(c)),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    PointerDown,
    TouchStart,
    KeyDown(Key),
    KeyUp(Key),
}

impl RawInput {
    fn normalized(self) -> Self {
        match self {
            RawInput::KeyDown(key) => RawInput::KeyDown(key.normalized()),
            RawInput::KeyUp(key) => RawInput::KeyUp(key.normalized()),
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputDispatcher {
    held_keys: HashSet<Key>,
    tracks_release: bool,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDispatcher {
    /// Dispatcher for platforms that report key releases.
    pub fn new() -> Self {
        Self {
            held_keys: HashSet::new(),
            tracks_release: true,
        }
    }

    /// Dispatcher for platforms that never send key-up events.
    ///
    /// Every key-down is treated as a fresh press; holding a key can't be
    /// detected, so repeat suppression falls to the platform adapter.
    pub fn without_release_events() -> Self {
        Self {
            held_keys: HashSet::new(),
            tracks_release: false,
        }
    }

    pub fn tracks_release(&self) -> bool {
        self.tracks_release
    }

    /// Translate one raw event. Returns `None` for unmapped input and for
    /// repeated key-downs of a key that is still held.
    pub fn dispatch(&mut self, raw: RawInput) -> Option<InputType> {
        match raw.normalized() {
            RawInput::PointerDown | RawInput::TouchStart => Some(InputType::Flap),
            RawInput::KeyDown(key) => {
                if self.tracks_release && !self.held_keys.insert(key) {
                    return None;
                }
                map_key(key)
            }
            RawInput::KeyUp(key) => {
                self.held_keys.remove(&key);
                None
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key.normalized())
    }

    /// Forget all held keys.
    pub fn reset(&mut self) {
        self.held_keys.clear();
    }
}

fn map_key(key: Key) -> Option<InputType> {
    match key {
        Key::Space | Key::Up | Key::Enter => Some(InputType::Flap),
        Key::Char('p') => Some(InputType::Pause),
        Key::Char('m') => Some(InputType::Mute),
        _ => None,
    }
}
