//! Rendering: the [`Renderer`] contract, the terminal implementation and a
//! recording implementation for headless runs.

pub mod flappy_scene;
pub mod game_common;
pub mod recording;
pub mod renderer;
pub mod terminal;
pub mod terminal_input;

pub use recording::{RecordingRenderer, RenderCall};
pub use renderer::{GameplayView, Renderer};
pub use terminal::{TerminalRenderer, TerminalSession};
pub use terminal_input::{translate, TerminalCommand};

/// Cells left for the play area in a `cols` x `rows` terminal.
pub fn play_area_size(cols: u16, rows: u16) -> (u16, u16) {
    let (chrome_w, chrome_h) = game_common::LAYOUT_CHROME;
    (cols.saturating_sub(chrome_w), rows.saturating_sub(chrome_h))
}
