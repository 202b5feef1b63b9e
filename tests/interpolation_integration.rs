//! Movement and camera integration tests: fixed-step motion, render
//! interpolation, and the world-to-screen transform.

use auroraengine::components::movement::{Alignment, Movement};
use auroraengine::objects::camera::Camera;
use auroraengine::objects::game_object::{GameObject, UpdateCtx};
use auroraengine::window::{InputSnapshot, Key};
use glam::Vec2;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// =============================================================================
// Fixed-step movement
// =============================================================================

#[test]
fn velocity_accumulates_over_fixed_updates() {
    let mut movement = Movement::new(Vec2::ZERO);
    let fixed_dt = 0.02;

    // 50 updates at 10 units/s over 20ms steps: exactly +10 on x.
    for _ in 0..50 {
        assert!(movement.move_pos(Vec2::new(10.0, 0.0), fixed_dt));
    }
    assert!(approx_eq(movement.pos(), Vec2::new(10.0, 0.0)));
}

#[test]
fn mixed_velocities_sum_exactly() {
    let mut movement = Movement::new(Vec2::ZERO);
    let fixed_dt = 0.02;
    let velocities = [
        Vec2::new(10.0, -5.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(-2.5, 4.0),
        Vec2::new(100.0, 100.0),
    ];

    let mut expected = Vec2::ZERO;
    for v in velocities {
        movement.move_pos(v, fixed_dt);
        expected += v * fixed_dt;
    }
    assert!(approx_eq(movement.pos(), expected));
}

#[test]
fn zero_velocity_reports_not_moved() {
    let mut movement = Movement::new(Vec2::new(7.0, 7.0));
    assert!(!movement.move_pos(Vec2::ZERO, 0.02));
    assert_eq!(movement.pos(), Vec2::new(7.0, 7.0));
}

// =============================================================================
// Render interpolation
// =============================================================================

#[test]
fn draw_pos_moves_monotonically_from_previous_to_current() {
    let mut movement = Movement::new(Vec2::new(0.0, 10.0));
    movement.set_pos(Vec2::new(20.0, 30.0));

    let mut last_x = f32::MIN;
    for step in 0..=10 {
        let t = step as f32 / 10.0;
        let pos = movement.draw_pos(t);
        assert!(pos.x >= last_x);
        last_x = pos.x;
    }
    assert!(approx_eq(movement.draw_pos(0.0), Vec2::new(0.0, 10.0)));
    assert!(approx_eq(movement.draw_pos(1.0), Vec2::new(20.0, 30.0)));
}

#[test]
fn draw_pos_twice_returns_identical_positions() {
    let mut movement = Movement::new(Vec2::ZERO);
    movement.set_pos(Vec2::new(8.0, 8.0));

    let first = movement.draw_pos(0.4);
    let second = movement.draw_pos(0.4);
    assert_eq!(first, second);
}

#[test]
fn commit_frame_starts_next_frame_from_current() {
    let mut movement = Movement::new(Vec2::ZERO);
    movement.set_pos(Vec2::new(10.0, 0.0));
    movement.commit_frame();
    movement.set_pos(Vec2::new(20.0, 0.0));

    // New frame interpolates 10 -> 20, not 0 -> 20.
    assert!(approx_eq(movement.draw_pos(0.5), Vec2::new(15.0, 0.0)));
}

#[test]
fn teleport_without_commit_blends_from_old_baseline() {
    let mut movement = Movement::new(Vec2::ZERO);
    movement.set_pos(Vec2::new(100.0, 0.0));

    // set_pos alone never advances the baseline.
    assert!(approx_eq(movement.draw_pos(0.0), Vec2::ZERO));
}

// =============================================================================
// Camera transform
// =============================================================================

#[test]
fn world_to_screen_is_centre_offset_at_identity() {
    let camera = Camera::new("cam", Vec2::ZERO, 1.0);
    let center = Vec2::new(400.0, 300.0);

    for world in [Vec2::ZERO, Vec2::new(10.0, -20.0), Vec2::new(-300.0, 5.5)] {
        assert!(approx_eq(camera.world_to_screen(world, center), center + world));
    }
}

#[test]
fn world_to_screen_applies_pan_and_zoom() {
    let mut camera = Camera::new("cam", Vec2::new(100.0, 0.0), 1.0);
    camera.set_scale(2.0);

    let screen = camera.world_to_screen(Vec2::new(110.0, 0.0), Vec2::new(400.0, 300.0));
    assert!(approx_eq(screen, Vec2::new(420.0, 300.0)));
}

#[test]
fn camera_pans_with_held_keys() {
    let mut camera = Camera::new("cam", Vec2::ZERO, 1.0).with_pan_speed(200.0);
    let input = InputSnapshot::from_held([Key::D, Key::S]);
    let ctx = UpdateCtx {
        fixed_dt: 0.02,
        elapsed_ms: 16.0,
        now_ms: 0.0,
        input: &input,
    };

    camera.update(&ctx);
    assert!(approx_eq(camera.movement().pos(), Vec2::new(4.0, 4.0)));

    // No keys held: stays put.
    let idle = InputSnapshot::default();
    let ctx = UpdateCtx {
        fixed_dt: 0.02,
        elapsed_ms: 16.0,
        now_ms: 0.0,
        input: &idle,
    };
    camera.update(&ctx);
    assert!(approx_eq(camera.movement().pos(), Vec2::new(4.0, 4.0)));
}

// =============================================================================
// Alignment interaction
// =============================================================================

#[test]
fn aligned_draw_pos_interpolates_then_offsets() {
    let mut movement = Movement::new(Vec2::ZERO)
        .with_dim(Vec2::new(10.0, 10.0))
        .with_alignment(Alignment {
            top: true,
            left: true,
            ..Alignment::default()
        });
    movement.set_pos(Vec2::new(10.0, 0.0));

    // Top-left alignment: no offset, pure lerp.
    assert!(approx_eq(movement.draw_pos(0.5), Vec2::new(5.0, 0.0)));

    movement.set_alignment(Alignment::default());
    // Centre alignment subtracts half the dimension after the lerp.
    assert!(approx_eq(movement.draw_pos(0.5), Vec2::new(0.0, -5.0)));
}
