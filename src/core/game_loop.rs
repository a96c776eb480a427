//! Frame scheduling around the engine.
//!
//! The loop is single-threaded and cooperative: the driver waits until
//! [`GameLoop::time_until_next_frame`] elapses (handling input meanwhile),
//! then calls [`GameLoop::run_due_frame`], which runs the frame and
//! schedules the next one. Stopping cancels the pending frame, so nothing
//! runs after teardown.

use super::clock::Clock;
use super::config::FieldSize;
use super::engine::{GameEngine, GameEvent};
use crate::error::GameError;
use crate::managers::{InputDispatcher, RawInput};
use crate::ui::renderer::Renderer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameRequest {
    id: u64,
    due_ms: f64,
}

pub struct GameLoop<R: Renderer, C: Clock> {
    engine: GameEngine<R>,
    clock: C,
    input: InputDispatcher,
    frame_interval_ms: f64,
    pending: Option<FrameRequest>,
    next_request_id: u64,
    frames_run: u64,
}

impl<R: Renderer, C: Clock> GameLoop<R, C> {
    pub fn new(engine: GameEngine<R>, clock: C, input: InputDispatcher) -> Self {
        let frame_interval_ms = engine.config().frame_interval_ms as f64;
        Self {
            engine,
            clock,
            input,
            frame_interval_ms,
            pending: None,
            next_request_id: 0,
            frames_run: 0,
        }
    }

    /// Schedule the first frame to run immediately. The first frame sees an
    /// elapsed time of zero. Does nothing if already running.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let now = self.clock.now_ms();
        self.engine.set_last_frame_time(now);
        self.schedule(now);
        tracing::info!("Game loop started");
    }

    /// Cancel the pending frame. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.input.reset();
            tracing::info!(
                cancelled_frame = request.id,
                frames = self.frames_run,
                "Game loop stopped"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    fn schedule(&mut self, due_ms: f64) {
        self.pending = Some(FrameRequest {
            id: self.next_request_id,
            due_ms,
        });
        self.next_request_id += 1;
    }

    /// How long until the pending frame is due; `None` when stopped.
    pub fn time_until_next_frame(&self) -> Option<Duration> {
        let request = self.pending?;
        let wait_ms = (request.due_ms - self.clock.now_ms()).max(0.0);
        Some(Duration::from_secs_f64(wait_ms / 1000.0))
    }

    /// Run the pending frame if it is due. Returns the frame's events, or
    /// `None` if nothing ran (stopped, or not yet due).
    ///
    /// A render failure propagates and leaves the loop stopped.
    pub fn run_due_frame(&mut self) -> Result<Option<Vec<GameEvent>>, GameError> {
        let Some(request) = self.pending else {
            return Ok(None);
        };
        let now = self.clock.now_ms();
        if now < request.due_ms {
            return Ok(None);
        }

        self.pending = None;
        let events = self.engine.frame(now)?;
        self.frames_run += 1;
        self.schedule(now + self.frame_interval_ms);
        Ok(Some(events))
    }

    /// Feed a raw platform event through the dispatcher into the engine.
    pub fn handle_raw_input(&mut self, raw: RawInput) -> Option<GameEvent> {
        let input = self.input.dispatch(raw)?;
        self.engine.handle_input(input)
    }

    pub fn resize(&mut self, field: FieldSize) {
        self.engine.resize(field);
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<R> {
        &mut self.engine
    }
}
