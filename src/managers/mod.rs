//! Managers owned by the engine: obstacles, score, input, audio.

pub mod audio;
pub mod input;
pub mod obstacles;
pub mod score;

pub use audio::{AudioManager, Sound, SoundSink, TerminalBell};
pub use input::{InputDispatcher, InputType, Key, RawInput};
pub use obstacles::ObstacleManager;
pub use score::{ScoreSummary, ScoreTracker};
