//! Integration test: Obstacle manager
//!
//! Spawn timing, collision against spawned pipes, scoring, pruning and
//! resizing, all with seeded placement.

use flappy_pigeon::core::Rect;
use flappy_pigeon::managers::ObstacleManager;
use flappy_pigeon::{FieldSize, GameConfig};

fn manager(seed: u64) -> ObstacleManager {
    let config = GameConfig::default();
    ObstacleManager::with_seed(&config, config.field(), seed)
}

// =============================================================================
// Spawning
// =============================================================================

#[test]
fn test_spawn_after_exact_interval_in_one_call() {
    let mut m = manager(1);
    m.update(2000.0);
    assert_eq!(m.obstacles().len(), 1);
}

#[test]
fn test_spawn_after_interval_split_across_calls() {
    let mut m = manager(1);
    for _ in 0..4 {
        m.update(500.0);
    }
    assert_eq!(m.obstacles().len(), 1);
    assert_eq!(m.spawn_timer(), 0.0);
}

#[test]
fn test_long_stall_spawns_once() {
    let mut m = manager(1);
    m.update(7000.0);
    assert_eq!(m.obstacles().len(), 1);
    assert_eq!(m.spawn_timer(), 0.0);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = manager(99);
    let mut b = manager(99);
    for _ in 0..3 {
        a.update(2000.0);
        b.update(2000.0);
    }
    let tops_a: Vec<f64> = a.obstacles().iter().map(|o| o.top_height).collect();
    let tops_b: Vec<f64> = b.obstacles().iter().map(|o| o.top_height).collect();
    assert_eq!(tops_a, tops_b);
}

#[test]
fn test_every_obstacle_spans_field() {
    let mut m = manager(5);
    for _ in 0..20 {
        m.update(2000.0);
        for o in m.obstacles() {
            let total = o.top_height + o.gap_size + o.bottom_height;
            assert!((total - 600.0).abs() < 1e-9);
            assert!(o.top_height >= 50.0);
            assert!(o.bottom_height >= 50.0);
        }
    }
}

// =============================================================================
// Collisions and scoring
// =============================================================================

#[test]
fn test_collision_inside_gap_and_against_top() {
    let mut m = manager(3);
    m.update(2000.0);
    let o = &m.obstacles()[0];

    let in_gap = Rect::new(o.x + 10.0, o.top_height + 10.0, 40.0, 40.0);
    assert!(!m.check_collisions(&in_gap));

    let into_top = Rect::new(o.x + 10.0, o.top_height - 20.0, 40.0, 40.0);
    assert!(m.check_collisions(&into_top));

    let into_bottom = Rect::new(o.x + 10.0, o.top_height + o.gap_size - 20.0, 40.0, 40.0);
    assert!(m.check_collisions(&into_bottom));
}

#[test]
fn test_each_obstacle_scores_once() {
    let mut m = manager(3);
    m.update(2000.0);
    let right = m.obstacles()[0].right_edge();

    let before = Rect::new(right - 30.0, 280.0, 40.0, 40.0);
    assert_eq!(m.check_scoring(&before), 0);

    let past = Rect::new(right - 10.0, 280.0, 40.0, 40.0);
    assert_eq!(m.check_scoring(&past), 1);
    assert_eq!(m.check_scoring(&past), 0);
}

// =============================================================================
// Pruning, reset and resize
// =============================================================================

#[test]
fn test_obstacles_pruned_after_leaving_screen() {
    let mut m = manager(8);
    m.update(2000.0);
    // Each 1800ms step moves pipes 225 units; the first one is gone after
    // the third step, while spawns happen on every second step
    for _ in 0..4 {
        m.update(1800.0);
    }
    let xs: Vec<f64> = m.obstacles().iter().map(|o| o.x).collect();
    assert_eq!(xs, vec![125.0, 575.0]);
    assert!(m.obstacles().iter().all(|o| !o.is_off_screen()));
}

#[test]
fn test_reset_is_idempotent() {
    let mut m = manager(2);
    m.update(2000.0);
    m.update(1000.0);
    m.reset();
    assert!(m.obstacles().is_empty());
    assert_eq!(m.spawn_timer(), 0.0);
    m.reset();
    assert!(m.obstacles().is_empty());
}

#[test]
fn test_resize_applies_to_new_obstacles_only() {
    let mut m = manager(4);
    m.update(2000.0);
    m.set_field(FieldSize::new(800.0, 400.0));
    m.update(2000.0);

    let heights: Vec<f64> = m.obstacles().iter().map(|o| o.field_height()).collect();
    assert_eq!(heights.len(), 2);
    assert!((heights[0] - 600.0).abs() < 1e-9);
    assert!((heights[1] - 400.0).abs() < 1e-9);
}
