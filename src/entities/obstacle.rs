//! A single pipe: two solid segments with a gap between them.

use crate::core::config::GameConfig;
use crate::core::constants::REFERENCE_FRAME_MS;
use crate::core::geometry::{Point, Rect};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge in world units. Decreases as the obstacle scrolls.
    pub x: f64,
    pub width: f64,
    pub gap_size: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    /// Set once the flyer has cleared this obstacle. Never reset.
    pub passed: bool,
    speed: f64,
}

impl Obstacle {
    /// Create an obstacle at `x` with a randomly placed gap.
    ///
    /// The gap top is drawn uniformly from
    /// `[margin_top, field_height - gap - margin_bottom]`, so
    /// `top_height + gap_size + bottom_height == field_height`. A field too
    /// short for that range pins the gap under the top margin and shrinks
    /// the gap so neither segment goes negative.
    pub fn new<R: Rng>(x: f64, field_height: f64, config: &GameConfig, rng: &mut R) -> Self {
        let field_height = field_height.max(0.0);
        let min_gap_top = config.gap_margin_top.min(field_height);
        let max_gap_top = field_height - config.obstacle_gap - config.gap_margin_bottom;

        let (gap_top, gap_size) = if max_gap_top > min_gap_top {
            (rng.gen_range(min_gap_top..=max_gap_top), config.obstacle_gap)
        } else if max_gap_top == min_gap_top {
            (min_gap_top, config.obstacle_gap)
        } else {
            tracing::warn!(
                field_height,
                gap = config.obstacle_gap,
                "Field too short for obstacle gap, clamping"
            );
            let gap = config.obstacle_gap.min(field_height - min_gap_top);
            (min_gap_top, gap)
        };

        Self {
            x,
            width: config.obstacle_width,
            gap_size,
            top_height: gap_top,
            bottom_height: field_height - gap_top - gap_size,
            passed: false,
            speed: config.obstacle_speed,
        }
    }

    /// Scroll left by `speed` per reference frame.
    pub fn update(&mut self, dt_ms: f64) {
        self.x -= self.speed * (dt_ms / REFERENCE_FRAME_MS);
    }

    /// Top and bottom segments, in that order.
    pub fn bounds(&self) -> [Rect; 2] {
        [
            Rect::new(self.x, 0.0, self.width, self.top_height),
            Rect::new(
                self.x,
                self.top_height + self.gap_size,
                self.width,
                self.bottom_height,
            ),
        ]
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn gap_center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.top_height + self.gap_size / 2.0,
        }
    }

    /// Field height this obstacle was built for.
    pub fn field_height(&self) -> f64 {
        self.top_height + self.gap_size + self.bottom_height
    }
}
