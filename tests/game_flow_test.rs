//! Integration test: Game flow
//!
//! Drives the engine through the frame loop with a manual clock and a
//! recording renderer: starting a run, physics per frame, crashing,
//! pausing, and loop teardown.

use flappy_pigeon::core::CrashCause;
use flappy_pigeon::managers::AudioManager;
use flappy_pigeon::ui::RenderCall;
use flappy_pigeon::{
    GameConfig, GameEngine, GameEvent, GameLoop, GameState, InputDispatcher, Key, ManualClock,
    MemoryStore, RawInput, RecordingRenderer, SharedStore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

type TestLoop = GameLoop<RecordingRenderer, ManualClock>;

fn new_loop(store: SharedStore) -> (TestLoop, ManualClock) {
    let clock = ManualClock::new(1000.0);
    let engine = GameEngine::new(
        GameConfig::default(),
        RecordingRenderer::new(),
        store.clone(),
        AudioManager::silent(store),
        StdRng::seed_from_u64(42),
    )
    .unwrap();
    (
        GameLoop::new(engine, clock.clone(), InputDispatcher::new()),
        clock,
    )
}

fn press(game: &mut TestLoop, key: Key) -> Option<GameEvent> {
    let event = game.handle_raw_input(RawInput::KeyDown(key));
    game.handle_raw_input(RawInput::KeyUp(key));
    event
}

/// Advance the clock one frame interval and run the frame.
fn step(game: &mut TestLoop, clock: &ManualClock) -> Vec<GameEvent> {
    clock.advance(16.0);
    game.run_due_frame().unwrap().unwrap_or_default()
}

// =============================================================================
// Starting a run
// =============================================================================

#[test]
fn test_flap_on_menu_starts_fresh_run() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    game.run_due_frame().unwrap();

    // Leftovers that a new run must clear
    let engine = game.engine_mut();
    engine.flyer_mut().y = 10.0;
    engine.flyer_mut().velocity = 6.0;
    engine.obstacles_mut().update(2000.0);
    assert_eq!(engine.obstacles().obstacles().len(), 1);

    assert_eq!(press(&mut game, Key::Space), Some(GameEvent::Started));

    let engine = game.engine();
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.score().current_score(), 0);
    assert!(engine.obstacles().obstacles().is_empty());
    assert!((engine.flyer().y - 280.0).abs() < f64::EPSILON);
    assert_eq!(engine.flyer().velocity, 0.0);

    step(&mut game, &clock);
    assert!(matches!(
        game.engine().renderer().last_frame()[2],
        RenderCall::Gameplay { score: 0, .. }
    ));
}

#[test]
fn test_one_frame_of_gravity() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    game.run_due_frame().unwrap();
    press(&mut game, Key::Enter);

    step(&mut game, &clock);
    let flyer = game.engine().flyer();
    assert!((flyer.velocity - 0.5).abs() < 1e-9);
    assert!((flyer.y - 280.5).abs() < 1e-9);
}

#[test]
fn test_first_obstacle_after_spawn_interval() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    game.run_due_frame().unwrap();
    press(&mut game, Key::Space);

    // Keep the flyer mid-field so the run survives
    for _ in 0..124 {
        game.engine_mut().flyer_mut().y = 280.0;
        step(&mut game, &clock);
    }
    assert!(game.engine().obstacles().obstacles().is_empty());

    game.engine_mut().flyer_mut().y = 280.0;
    step(&mut game, &clock);
    assert_eq!(game.engine().obstacles().obstacles().len(), 1);
}

// =============================================================================
// Crashing
// =============================================================================

#[test]
fn test_falling_to_the_floor_ends_run() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    game.run_due_frame().unwrap();
    press(&mut game, Key::Space);

    let mut crash = None;
    for _ in 0..200 {
        for event in step(&mut game, &clock) {
            if let GameEvent::Crashed { cause, .. } = event {
                crash = Some(cause);
            }
        }
        if crash.is_some() {
            break;
        }
    }
    assert_eq!(crash, Some(CrashCause::OutOfBounds));
    assert_eq!(game.engine().state(), GameState::GameOver);

    // Frozen after the crash
    let y = game.engine().flyer().y;
    step(&mut game, &clock);
    assert_eq!(game.engine().flyer().y, y);
    assert!(matches!(
        game.engine().renderer().last_frame()[3],
        RenderCall::GameOver(_)
    ));

    assert_eq!(press(&mut game, Key::Space), Some(GameEvent::ReturnedToMenu));
    assert_eq!(game.engine().state(), GameState::Menu);
}

// =============================================================================
// Pause and mute
// =============================================================================

#[test]
fn test_pause_and_resume_with_p() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    game.run_due_frame().unwrap();
    press(&mut game, Key::Space);
    step(&mut game, &clock);

    assert_eq!(press(&mut game, Key::Char('p')), Some(GameEvent::Paused));
    let y = game.engine().flyer().y;
    for _ in 0..10 {
        step(&mut game, &clock);
    }
    assert_eq!(game.engine().flyer().y, y);
    assert!(game
        .engine()
        .renderer()
        .last_frame()
        .contains(&RenderCall::PauseOverlay));

    assert_eq!(press(&mut game, Key::Char('P')), Some(GameEvent::Resumed));
    step(&mut game, &clock);
    assert!(game.engine().flyer().y > y);
}

#[test]
fn test_mute_survives_restart() {
    let store: SharedStore = Rc::new(MemoryStore::new());
    let (mut game, _clock) = new_loop(store.clone());
    assert_eq!(
        press(&mut game, Key::Char('m')),
        Some(GameEvent::MuteToggled { muted: true })
    );

    let (game, _clock) = new_loop(store);
    assert!(game.engine().audio().is_muted());
}

// =============================================================================
// Loop lifecycle
// =============================================================================

#[test]
fn test_no_frames_after_stop() {
    let (mut game, clock) = new_loop(Rc::new(MemoryStore::new()));
    game.start();
    for _ in 0..5 {
        game.run_due_frame().unwrap();
        clock.advance(16.0);
    }
    let presented = game.engine().renderer().frames_presented();
    game.stop();
    game.stop();

    for _ in 0..5 {
        clock.advance(16.0);
        assert!(game.run_due_frame().unwrap().is_none());
    }
    assert_eq!(game.engine().renderer().frames_presented(), presented);
    assert!(game.time_until_next_frame().is_none());
}
