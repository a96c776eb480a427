//! Simulation entities: the flyer and the obstacles it must pass.

pub mod flyer;
pub mod obstacle;

pub use flyer::Flyer;
pub use obstacle::Obstacle;
