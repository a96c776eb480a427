//! Game loop core: configuration, geometry, the state machine, the engine
//! and its frame scheduler.

pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod game_loop;
pub mod game_state;
pub mod geometry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FieldSize, GameConfig};
pub use constants::*;
pub use engine::{CrashCause, GameEngine, GameEvent};
pub use game_loop::GameLoop;
pub use game_state::{GameState, Transition};
pub use geometry::{rectangles_overlap, Point, Rect};
