//! Game engine: owns the world, runs one frame at a time, and applies input
//! according to the state table in [`GameState::on_input`].

use super::config::{FieldSize, GameConfig};
use super::game_state::{GameState, Transition};
use crate::entities::Flyer;
use crate::error::GameError;
use crate::managers::{AudioManager, InputType, ObstacleManager, ScoreTracker, Sound};
use crate::ui::renderer::{GameplayView, Renderer};
use crate::utils::persistence::SharedStore;
use rand::rngs::StdRng;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Obstacle,
    OutOfBounds,
}

/// Something that happened during a frame or in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Flapped,
    Scored { points: u32, total: u32 },
    Crashed { cause: CrashCause, score: u32 },
    Paused,
    Resumed,
    ReturnedToMenu,
    MuteToggled { muted: bool },
}

pub struct GameEngine<R: Renderer> {
    config: GameConfig,
    field: FieldSize,
    state: GameState,
    last_frame_time: f64,
    flyer: Flyer,
    obstacles: ObstacleManager,
    score: ScoreTracker,
    audio: AudioManager,
    renderer: R,
    debug: bool,
}

impl<R: Renderer> GameEngine<R> {
    /// Build an engine on the configured field. Fails if `config` is invalid.
    pub fn new(
        config: GameConfig,
        renderer: R,
        store: SharedStore,
        audio: AudioManager,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let field = config.field();
        let (x, y) = config.flyer_start(field);
        let engine = Self {
            flyer: Flyer::new(x, y, &config),
            obstacles: ObstacleManager::new(&config, field, rng),
            score: ScoreTracker::new(store),
            audio,
            renderer,
            field,
            state: GameState::Menu,
            last_frame_time: 0.0,
            debug: false,
            config,
        };
        tracing::info!(
            width = field.width,
            height = field.height,
            best = engine.score.best_score(),
            "Game engine initialized"
        );
        Ok(engine)
    }

    /// Run one frame at timestamp `now_ms`: advance the simulation if
    /// playing, then draw.
    pub fn frame(&mut self, now_ms: f64) -> Result<Vec<GameEvent>, GameError> {
        let dt = now_ms - self.last_frame_time;
        self.last_frame_time = now_ms;
        tracing::trace!(dt, state = self.state.name(), "Frame");

        let events = if self.state.is_simulating() {
            self.update_gameplay(dt)
        } else {
            Vec::new()
        };

        self.render(dt)?;
        Ok(events)
    }

    fn update_gameplay(&mut self, dt: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.flyer.update(dt);
        self.obstacles.update(dt);

        let bounds = self.flyer.bounds();
        let crash = if self.flyer.is_out_of_bounds(self.field) {
            Some(CrashCause::OutOfBounds)
        } else if self.obstacles.check_collisions(&bounds) {
            Some(CrashCause::Obstacle)
        } else {
            None
        };

        // Pipes cleared on the crash frame still count toward the final score.
        let points = self.obstacles.check_scoring(&bounds);
        if points > 0 {
            self.score.add_score(points);
            self.audio.play(Sound::Score);
            tracing::debug!(points, total = self.score.current_score(), "Scored");
            events.push(GameEvent::Scored {
                points,
                total: self.score.current_score(),
            });
        }

        if let Some(cause) = crash {
            self.game_over(cause);
            events.push(GameEvent::Crashed {
                cause,
                score: self.score.current_score(),
            });
        }

        events
    }

    fn game_over(&mut self, cause: CrashCause) {
        self.state = GameState::GameOver;
        self.audio.play(Sound::GameOver);
        tracing::info!(
            ?cause,
            score = self.score.current_score(),
            best = self.score.best_score(),
            "Game over"
        );
    }

    fn render(&mut self, dt: f64) -> Result<(), GameError> {
        let renderer = &mut self.renderer;
        renderer.clear();
        renderer.render_background(self.state.is_simulating().then_some(dt));

        let view = GameplayView {
            flyer: &self.flyer,
            obstacles: self.obstacles.obstacles(),
            field: self.field,
            score: self.score.current_score(),
            best: self.score.best_score(),
            muted: self.audio.is_muted(),
            debug: self.debug,
        };

        match self.state {
            GameState::Menu => renderer.render_menu(self.score.best_score()),
            GameState::Playing => renderer.render_gameplay(&view),
            GameState::GameOver => {
                renderer.render_gameplay(&view);
                renderer.render_game_over(&self.score.summary());
            }
            GameState::Paused => {
                renderer.render_gameplay(&view);
                renderer.render_pause_overlay();
            }
        }

        renderer.present().map_err(GameError::Render)
    }

    /// Apply a semantic input. Returns the resulting event, or `None` when
    /// the input means nothing in the current state.
    pub fn handle_input(&mut self, input: InputType) -> Option<GameEvent> {
        let transition = self.state.on_input(input);
        let event = match transition {
            Transition::StartGame => {
                self.reset_world();
                tracing::info!("Game started");
                Some(GameEvent::Started)
            }
            Transition::Flap => {
                self.flyer.flap();
                self.audio.play(Sound::Flap);
                Some(GameEvent::Flapped)
            }
            Transition::Pause => {
                tracing::info!("Game paused");
                Some(GameEvent::Paused)
            }
            Transition::Resume => {
                tracing::info!("Game resumed");
                Some(GameEvent::Resumed)
            }
            Transition::ReturnToMenu => {
                self.reset_world();
                tracing::info!("Returned to menu");
                Some(GameEvent::ReturnedToMenu)
            }
            Transition::ToggleMute => Some(GameEvent::MuteToggled {
                muted: self.audio.toggle_mute(),
            }),
            Transition::Ignore => None,
        };
        self.state = self.state.after(transition);
        event
    }

    fn reset_world(&mut self) {
        let (x, y) = self.config.flyer_start(self.field);
        self.flyer.reset(x, y);
        self.obstacles.reset();
        self.score.reset();
    }

    /// Adopt new field dimensions. Obstacles already on screen keep their
    /// shape; outside of play the flyer is re-centered.
    pub fn resize(&mut self, field: FieldSize) {
        self.field = field;
        self.obstacles.set_field(field);
        if matches!(self.state, GameState::Menu) {
            let (x, y) = self.config.flyer_start(field);
            self.flyer.reset(x, y);
        }
        tracing::info!(width = field.width, height = field.height, "Field resized");
    }

    /// Set the reference timestamp for the next frame's elapsed time.
    pub fn set_last_frame_time(&mut self, now_ms: f64) {
        self.last_frame_time = now_ms;
    }

    pub fn last_frame_time(&self) -> f64 {
        self.last_frame_time
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn flyer_mut(&mut self) -> &mut Flyer {
        &mut self.flyer
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleManager {
        &mut self.obstacles
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn field(&self) -> FieldSize {
        self.field
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
