//! Sound cues with a persisted mute preference.
//!
//! Audio is optional: a sink that failed to initialize leaves the game
//! silent, and playback errors are logged and dropped.

use crate::core::constants::MUTED_KEY;
use crate::utils::persistence::SharedStore;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Flap,
    Score,
    GameOver,
}

/// Something that can make a sound.
pub trait SoundSink {
    fn play(&mut self, sound: Sound) -> io::Result<()>;
}

/// Rings the terminal bell. Flaps are too frequent for a bell and stay
/// silent.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, sound: Sound) -> io::Result<()> {
        match sound {
            Sound::Flap => Ok(()),
            Sound::Score | Sound::GameOver => {
                self.out.write_all(b"\x07")?;
                self.out.flush()
            }
        }
    }
}

pub struct AudioManager {
    sink: Option<Box<dyn SoundSink>>,
    muted: bool,
    store: SharedStore,
}

fn load_muted(store: &SharedStore) -> bool {
    match store.get(MUTED_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load mute preference");
            false
        }
    }
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn SoundSink>>, store: SharedStore) -> Self {
        if sink.is_none() {
            tracing::warn!("No sound output available, continuing without audio");
        }
        let muted = load_muted(&store);
        Self { sink, muted, store }
    }

    /// Audio manager with no output, e.g. for tests. The mute preference is
    /// still loaded and saved.
    pub fn silent(store: SharedStore) -> Self {
        Self {
            sink: None,
            muted: load_muted(&store),
            store,
        }
    }

    pub fn play(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.play(sound) {
                tracing::warn!(?sound, error = %e, "Failed to play sound");
            }
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Err(e) = self.store.set(MUTED_KEY, if muted { "true" } else { "false" }) {
            tracing::warn!(error = %e, "Failed to save mute preference");
        }
        tracing::info!(muted, "Audio mute changed");
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn has_output(&self) -> bool {
        self.sink.is_some()
    }
}
