//! The drawing contract between the engine and a display.

use crate::core::config::FieldSize;
use crate::entities::{Flyer, Obstacle};
use crate::managers::ScoreSummary;
use std::io;

/// Everything needed to draw a gameplay frame. Borrowed from the engine for
/// the duration of one `render_gameplay` call.
#[derive(Debug, Clone, Copy)]
pub struct GameplayView<'a> {
    pub flyer: &'a Flyer,
    pub obstacles: &'a [Obstacle],
    pub field: FieldSize,
    pub score: u32,
    pub best: u32,
    pub muted: bool,
    /// Mark pipe gap columns and show flyer telemetry.
    pub debug: bool,
}

/// Draws the current simulation state. The engine calls `clear`, then
/// `render_background`, then the layers for the current state, then
/// `present` once per frame.
pub trait Renderer {
    fn clear(&mut self);

    /// `dt_ms` is `Some` only while play is running, so background motion
    /// freezes on the menu, when paused, and after a crash.
    fn render_background(&mut self, dt_ms: Option<f64>);

    fn render_menu(&mut self, best_score: u32);

    fn render_gameplay(&mut self, view: &GameplayView<'_>);

    fn render_game_over(&mut self, summary: &ScoreSummary);

    fn render_pause_overlay(&mut self);

    /// Flush the composed frame to the display.
    fn present(&mut self) -> io::Result<()>;
}
