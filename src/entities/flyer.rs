//! The player-controlled pigeon.

use crate::core::config::{FieldSize, GameConfig};
use crate::core::constants::REFERENCE_FRAME_MS;
use crate::core::geometry::Rect;

/// Physics state for the flyer.
///
/// The flyer only moves vertically: `x` is fixed by the spawn point and only
/// changes through `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity per reference frame (positive = downward).
    pub velocity: f64,
    /// Tilt in radians, derived from velocity.
    pub rotation: f64,
    /// True between a flap and the next physics update.
    pub is_flapping: bool,
    size: f64,
    gravity: f64,
    flap_strength: f64,
    min_velocity: f64,
    max_velocity: f64,
    rotation_factor: f64,
    max_rotation: f64,
}

impl Flyer {
    pub fn new(x: f64, y: f64, config: &GameConfig) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            rotation: 0.0,
            is_flapping: false,
            size: config.flyer_size,
            gravity: config.gravity,
            flap_strength: config.flap_strength,
            min_velocity: config.min_velocity,
            max_velocity: config.max_velocity,
            rotation_factor: config.rotation_factor,
            max_rotation: config.max_rotation,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn velocity_bounds(&self) -> (f64, f64) {
        (self.min_velocity, self.max_velocity)
    }

    /// Set velocity to the flap impulse. Overrides, never adds.
    pub fn flap(&mut self) {
        self.velocity = self.flap_strength;
        self.is_flapping = true;
    }

    /// Advance physics by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: f64) {
        let scale = dt_ms / REFERENCE_FRAME_MS;

        self.velocity += self.gravity * scale;
        self.velocity = self.velocity.clamp(self.min_velocity, self.max_velocity);

        self.y += self.velocity * scale;

        self.rotation = (self.velocity * self.rotation_factor)
            .clamp(-self.max_rotation, self.max_rotation);

        self.is_flapping = false;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn reset(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.velocity = 0.0;
        self.rotation = 0.0;
        self.is_flapping = false;
    }

    /// True once the flyer leaves the field through the ceiling or floor.
    ///
    /// Horizontal exit is not checked: `x` never changes during play.
    pub fn is_out_of_bounds(&self, field: FieldSize) -> bool {
        self.y < 0.0 || self.y + self.size > field.height
    }
}
