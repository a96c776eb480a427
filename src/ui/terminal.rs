//! ratatui renderer and terminal session management.

use super::flappy_scene::{render_composition, Composition, Overlay, SceneSnapshot};
use super::renderer::{GameplayView, Renderer};
use crate::core::config::FieldSize;
use crate::core::constants::REFERENCE_FRAME_MS;
use crate::error::GameError;
use crate::managers::ScoreSummary;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Stdout};

/// Cloud drift in world units per reference frame.
const CLOUD_SPEED: f64 = 0.5;

/// Draws frames to the terminal on stdout.
///
/// Layers are collected into a [`Composition`] between `clear` and
/// `present`; `present` draws them in one pass.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    composition: Composition,
    field: FieldSize,
    cloud_offset: f64,
}

impl TerminalRenderer {
    /// Fails with [`GameError::NoRenderSurface`] when stdout is not a terminal.
    pub fn new(field: FieldSize) -> Result<Self, GameError> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(GameError::NoRenderSurface);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(GameError::Terminal)?;
        Ok(Self {
            terminal,
            composition: Composition::new(field, 0.0),
            field,
            cloud_offset: 0.0,
        })
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let area = self.terminal.size()?;
        Ok((area.width, area.height))
    }
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self) {
        self.composition = Composition::new(self.field, self.cloud_offset);
    }

    fn render_background(&mut self, dt_ms: Option<f64>) {
        if let Some(dt) = dt_ms {
            self.cloud_offset += CLOUD_SPEED * dt / REFERENCE_FRAME_MS;
        }
        self.composition.cloud_offset = self.cloud_offset;
    }

    fn render_menu(&mut self, best_score: u32) {
        self.composition.overlay = Overlay::Menu { best: best_score };
    }

    fn render_gameplay(&mut self, view: &GameplayView<'_>) {
        self.field = view.field;
        self.composition.field = view.field;
        self.composition.scene = Some(SceneSnapshot::from_view(view));
    }

    fn render_game_over(&mut self, summary: &ScoreSummary) {
        self.composition.overlay = Overlay::GameOver(*summary);
    }

    fn render_pause_overlay(&mut self) {
        self.composition.overlay = Overlay::Paused;
    }

    fn present(&mut self) -> io::Result<()> {
        let composition = &self.composition;
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_composition(frame, area, composition);
        })?;
        Ok(())
    }
}

/// Terminal modes enabled for a play session. Restores the terminal when
/// dropped, so an early return or panic unwinding does not leave the shell
/// in raw mode.
pub struct TerminalSession {
    keyboard_enhanced: bool,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, enable mouse capture, and
    /// ask for key release events where the terminal supports them.
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the session undoes whatever was enabled.
        let mut session = Self {
            keyboard_enhanced: false,
            active: true,
        };

        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            stdout.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            session.keyboard_enhanced = true;
        }
        tracing::debug!(
            keyboard_enhanced = session.keyboard_enhanced,
            "Terminal session started"
        );

        Ok(session)
    }

    /// Whether the terminal reports key releases.
    pub fn reports_key_release(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Undo everything `start` enabled. Every step is attempted; the first
    /// failure is returned. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        let pop = if self.keyboard_enhanced {
            stdout.execute(PopKeyboardEnhancementFlags).map(|_| ())
        } else {
            Ok(())
        };
        let results = [
            pop,
            stdout.execute(DisableMouseCapture).map(|_| ()),
            stdout.execute(LeaveAlternateScreen).map(|_| ()),
            disable_raw_mode(),
        ];
        first_error(results)?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}

/// Keep the first error of a sequence of teardown steps.
fn first_error<I: IntoIterator<Item = io::Result<()>>>(results: I) -> io::Result<()> {
    results.into_iter().find(|r| r.is_err()).unwrap_or(Ok(()))
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}
