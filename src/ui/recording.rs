//! Headless renderer that records what it was asked to draw.

use super::renderer::{GameplayView, Renderer};
use crate::managers::ScoreSummary;
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Clear,
    Background(Option<f64>),
    Menu { best: u32 },
    Gameplay { score: u32, obstacles: usize, flyer_y: f64 },
    GameOver(ScoreSummary),
    PauseOverlay,
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    /// Make the next `present` fail.
    pub fail_next_present: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last `clear`.
    pub fn last_frame(&self) -> &[RenderCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == RenderCall::Clear)
            .unwrap_or(0);
        &self.calls[start..]
    }

    pub fn frames_presented(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == RenderCall::Present)
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(RenderCall::Clear);
    }

    fn render_background(&mut self, dt_ms: Option<f64>) {
        self.calls.push(RenderCall::Background(dt_ms));
    }

    fn render_menu(&mut self, best_score: u32) {
        self.calls.push(RenderCall::Menu { best: best_score });
    }

    fn render_gameplay(&mut self, view: &GameplayView<'_>) {
        self.calls.push(RenderCall::Gameplay {
            score: view.score,
            obstacles: view.obstacles.len(),
            flyer_y: view.flyer.y,
        });
    }

    fn render_game_over(&mut self, summary: &ScoreSummary) {
        self.calls.push(RenderCall::GameOver(*summary));
    }

    fn render_pause_overlay(&mut self) {
        self.calls.push(RenderCall::PauseOverlay);
    }

    fn present(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.fail_next_present) {
            return Err(io::Error::other("display lost"));
        }
        self.calls.push(RenderCall::Present);
        Ok(())
    }
}
