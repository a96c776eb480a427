//! Error taxonomy for the game.
//!
//! Construction failures (no terminal, bad config) are fatal and surface to
//! `main`. Storage failures have their own type and never reach gameplay:
//! callers log them and carry on with in-memory values.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// stdout is not attached to a terminal, so there is nothing to draw on.
    #[error("no rendering surface: stdout is not a terminal")]
    NoRenderSurface,
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Render(#[source] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read config file: {0}")]
    ConfigIo(#[source] io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}
