//! Obstacle lifecycle: spawning on a timer, scrolling, pruning, and the
//! collision and scoring queries against the flyer.

use crate::core::config::{FieldSize, GameConfig};
use crate::core::geometry::{rectangles_overlap, Rect};
use crate::entities::Obstacle;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    spawn_timer: f64,
    spawn_interval: f64,
    field: FieldSize,
    config: GameConfig,
    rng: StdRng,
}

impl ObstacleManager {
    pub fn new(config: &GameConfig, field: FieldSize, rng: StdRng) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval: config.spawn_interval_ms,
            field,
            config: config.clone(),
            rng,
        }
    }

    /// Manager with a fixed seed, for reproducible obstacle placement.
    pub fn with_seed(config: &GameConfig, field: FieldSize, seed: u64) -> Self {
        Self::new(config, field, StdRng::seed_from_u64(seed))
    }

    /// Advance the spawn timer and every obstacle by `dt_ms`.
    ///
    /// At most one obstacle spawns per call. When `dt_ms` spans several
    /// intervals (a stalled frame) the overflow is dropped: the timer resets
    /// to zero rather than catching up.
    pub fn update(&mut self, dt_ms: f64) {
        self.spawn_timer += dt_ms;

        if self.spawn_timer >= self.spawn_interval {
            self.spawn();
            self.spawn_timer = 0.0;
        }

        for obstacle in &mut self.obstacles {
            obstacle.update(dt_ms);
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let pruned = before - self.obstacles.len();
        if pruned > 0 {
            tracing::trace!(pruned, live = self.obstacles.len(), "Pruned obstacles");
        }
    }

    fn spawn(&mut self) {
        let obstacle = Obstacle::new(
            self.field.width,
            self.field.height,
            &self.config,
            &mut self.rng,
        );
        tracing::debug!(
            x = obstacle.x,
            gap_top = obstacle.top_height,
            "Spawned obstacle"
        );
        self.obstacles.push(obstacle);
    }

    /// True if `flyer` overlaps a segment of any live obstacle.
    pub fn check_collisions(&self, flyer: &Rect) -> bool {
        self.obstacles
            .iter()
            .flat_map(|o| o.bounds())
            .any(|segment| rectangles_overlap(flyer, &segment))
    }

    /// Mark every obstacle whose trailing edge is left of the flyer's center
    /// as passed, returning how many were newly passed. Each obstacle counts
    /// at most once over its lifetime.
    pub fn check_scoring(&mut self, flyer: &Rect) -> u32 {
        let center_x = flyer.center_x();
        let mut points = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right_edge() < center_x {
                obstacle.passed = true;
                points += 1;
            }
        }
        points
    }

    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn spawn_timer(&self) -> f64 {
        self.spawn_timer
    }

    pub fn field(&self) -> FieldSize {
        self.field
    }

    /// Use new field dimensions for future spawns. Live obstacles keep the
    /// geometry they were created with.
    pub fn set_field(&mut self, field: FieldSize) {
        self.field = field;
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
