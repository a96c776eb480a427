//! Flappy Pigeon - a side-scrolling arcade game for the terminal.
//!
//! The library holds the whole game: simulation entities, the managers the
//! engine owns, the state machine and frame loop, and the rendering
//! contract. The binary only wires a terminal to it.

pub mod core;
pub mod entities;
pub mod error;
pub mod managers;
pub mod ui;
pub mod utils;

pub use crate::core::{
    Clock, FieldSize, GameConfig, GameEngine, GameEvent, GameLoop, GameState, ManualClock,
    SystemClock,
};
pub use crate::entities::{Flyer, Obstacle};
pub use crate::error::{GameError, StoreError};
pub use crate::managers::{InputDispatcher, InputType, Key, RawInput};
pub use crate::ui::{RecordingRenderer, Renderer};
pub use crate::utils::persistence::{JsonFileStore, KeyValueStore, MemoryStore, SharedStore};
