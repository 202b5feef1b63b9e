//! Handler and engine-loop integration tests: draw ordering, culling,
//! camera assignment, and the bounded catch-up loop. All rendering goes
//! through the recording headless backend.

use std::cell::Cell;
use std::rc::Rc;

use auroraengine::components::movement::{Alignment, Movement};
use auroraengine::config::EngineConfig;
use auroraengine::engine::Engine;
use auroraengine::objects::camera::Camera;
use auroraengine::objects::game_object::{GameObject, UpdateCtx};
use auroraengine::objects::handler::GameObjectHandler;
use auroraengine::objects::sprite::SpriteObject;
use auroraengine::objects::trigger::Trigger;
use auroraengine::services::image::Image;
use auroraengine::window::headless::HeadlessWindow;
use auroraengine::window::{Window, WindowEvent};
use glam::Vec2;

fn window_800x600() -> HeadlessWindow {
    HeadlessWindow::new(Vec2::new(800.0, 600.0))
}

fn sprite_at(window: &mut HeadlessWindow, name: &str, pos: Vec2, dim: Vec2) -> SpriteObject {
    let surface = window.add_surface(dim);
    SpriteObject::new(name, pos, Image { surface, dim })
}

// =============================================================================
// Draw ordering and composition
// =============================================================================

#[test]
fn objects_draw_in_ascending_world_y_order() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let low = sprite_at(&mut window, "low", Vec2::new(0.0, 50.0), Vec2::new(16.0, 16.0));
    let high = sprite_at(&mut window, "high", Vec2::new(0.0, 10.0), Vec2::new(16.0, 16.0));
    handler.add("low", Box::new(low), true);
    handler.add("high", Box::new(high), true);

    handler.draw_to_window(&mut window, 0.0);

    let blits = window.blits();
    assert_eq!(blits.len(), 2);
    // Y=10 draws before Y=50; later blits paint on top.
    assert!(blits[0].pos.y < blits[1].pos.y);
    assert_eq!(blits[0].pos, Vec2::new(392.0, 302.0));
    assert_eq!(blits[1].pos, Vec2::new(392.0, 342.0));
}

#[test]
fn cameraless_drawing_is_relative_to_window_centre() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let sprite = sprite_at(&mut window, "s", Vec2::ZERO, Vec2::new(16.0, 16.0));
    handler.add("s", Box::new(sprite), true);

    handler.draw_to_window(&mut window, 0.0);

    // Centre-aligned 16x16 sprite at the origin: top-left is centre - 8.
    assert_eq!(window.blits()[0].pos, Vec2::new(392.0, 292.0));
}

#[test]
fn active_camera_transform_is_applied_to_blits() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let mut camera = Camera::new("camera", Vec2::new(100.0, 0.0), 1.0);
    camera.set_scale(2.0);
    handler.add("camera", Box::new(camera), true);
    handler.set_camera(Some("camera"));

    let mut sprite = sprite_at(&mut window, "s", Vec2::new(110.0, 0.0), Vec2::new(16.0, 16.0));
    // Top-left alignment so the draw position equals the world position.
    sprite.movement_mut().set_alignment(Alignment {
        top: true,
        left: true,
        ..Alignment::default()
    });
    handler.add("s", Box::new(sprite), true);

    handler.draw_to_window(&mut window, 0.0);

    let blits = window.blits();
    // Camera never blits itself.
    assert_eq!(blits.len(), 1);
    // centre + (world - camera) * scale = (400,300) + (10,0)*2.
    assert_eq!(blits[0].pos, Vec2::new(420.0, 300.0));
}

#[test]
fn hidden_and_offscreen_objects_are_skipped() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let mut hidden = sprite_at(&mut window, "hidden", Vec2::ZERO, Vec2::new(16.0, 16.0));
    hidden.set_display(false);
    handler.add("hidden", Box::new(hidden), true);

    let far = sprite_at(
        &mut window,
        "far",
        Vec2::new(5000.0, 5000.0),
        Vec2::new(16.0, 16.0),
    );
    handler.add("far", Box::new(far), true);

    handler.draw_to_window(&mut window, 0.0);
    assert!(window.blits().is_empty());

    assert!(!handler.is_visible("hidden", 0.0, &window));
    assert!(!handler.is_visible("far", 0.0, &window));
    assert!(!handler.is_visible("missing", 0.0, &window));
}

#[test]
fn interpolation_and_commit_shift_blit_positions() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let sprite = sprite_at(&mut window, "s", Vec2::ZERO, Vec2::new(16.0, 16.0));
    handler.add("s", Box::new(sprite), true);

    handler
        .get_mut("s", true)
        .unwrap()
        .movement_mut()
        .set_pos(Vec2::new(10.0, 0.0));

    // Halfway through the pending update the blit sits at the midpoint.
    handler.draw_to_window(&mut window, 0.5);
    assert_eq!(window.take_blits()[0].pos, Vec2::new(397.0, 292.0));

    handler.commit_frame();

    // After the commit the baseline has caught up.
    handler.draw_to_window(&mut window, 0.0);
    assert_eq!(window.take_blits()[0].pos, Vec2::new(402.0, 292.0));
}

#[test]
fn trigger_draws_outline_only_when_displayed() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let outline = window.add_surface(Vec2::new(48.0, 48.0));
    let trigger =
        Trigger::new("zone", Vec2::new(0.0, 0.0), Vec2::new(48.0, 48.0)).with_outline(outline);

    handler.add("zone", Box::new(trigger), true);
    handler.draw_to_window(&mut window, 0.0);
    assert!(window.take_blits().is_empty());

    handler
        .get_mut("zone", true)
        .unwrap()
        .set_display(true);
    handler.draw_to_window(&mut window, 0.0);
    let blits = window.take_blits();
    assert_eq!(blits.len(), 1);
    assert_eq!(blits[0].surface, outline);
}

// =============================================================================
// Camera assignment
// =============================================================================

#[test]
fn set_camera_rejects_non_camera_objects() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    handler.add(
        "camera",
        Box::new(Camera::new("camera", Vec2::ZERO, 1.0)),
        true,
    );
    let sprite = sprite_at(&mut window, "s", Vec2::ZERO, Vec2::new(8.0, 8.0));
    handler.add("s", Box::new(sprite), true);

    handler.set_camera(Some("camera"));
    assert_eq!(handler.camera_ident(), Some("camera"));

    // A sprite is not a camera: rejected, previous camera unchanged.
    handler.set_camera(Some("s"));
    assert_eq!(handler.camera_ident(), Some("camera"));

    // Unknown names are rejected the same way.
    handler.set_camera(Some("missing"));
    assert_eq!(handler.camera_ident(), Some("camera"));

    // None unsets.
    handler.set_camera(None);
    assert_eq!(handler.camera_ident(), None);
}

#[test]
fn removing_the_active_camera_unsets_it() {
    let mut handler = GameObjectHandler::new();
    handler.add(
        "camera",
        Box::new(Camera::new("camera", Vec2::ZERO, 1.0)),
        true,
    );
    handler.set_camera(Some("camera"));

    assert!(handler.remove("camera", true).is_some());
    assert_eq!(handler.camera_ident(), None);
}

#[test]
fn checked_accessors_tolerate_missing_names() {
    let mut handler = GameObjectHandler::new();

    assert!(handler.get("ghost", true).is_none());
    assert!(handler.get_mut("ghost", true).is_none());
    assert!(handler.remove("ghost", true).is_none());
    assert!(handler.is_empty());
}

#[test]
fn add_replaces_existing_objects_wholesale() {
    let mut window = window_800x600();
    let mut handler = GameObjectHandler::new();

    let first = sprite_at(&mut window, "s", Vec2::new(1.0, 1.0), Vec2::new(8.0, 8.0));
    let second = sprite_at(&mut window, "s", Vec2::new(9.0, 9.0), Vec2::new(8.0, 8.0));
    handler.add("s", Box::new(first), true);
    handler.add("s", Box::new(second), true);

    assert_eq!(handler.len(), 1);
    let object = handler.get("s", true).unwrap();
    assert_eq!(object.movement().pos(), Vec2::new(9.0, 9.0));
}

// =============================================================================
// Engine loop
// =============================================================================

struct CountingObject {
    movement: Movement,
    updates: Rc<Cell<u32>>,
}

impl GameObject for CountingObject {
    fn ident(&self) -> &str {
        "counter"
    }

    fn movement(&self) -> &Movement {
        &self.movement
    }

    fn movement_mut(&mut self) -> &mut Movement {
        &mut self.movement
    }

    fn set_display(&mut self, _display: bool) {}

    fn update(&mut self, _ctx: &UpdateCtx) {
        self.updates.set(self.updates.get() + 1);
    }
}

fn uncapped_config() -> EngineConfig {
    let mut config = EngineConfig::new();
    config.target_fps = 0;
    // Wide interval: the real milliseconds a frame() call takes on a busy
    // test machine must never shift the expected update counts.
    config.update_interval_ms = 500.0;
    config
}

#[test]
fn close_request_terminates_the_run_loop() {
    let mut window = window_800x600();
    window.push_event(WindowEvent::CloseRequested);

    let mut engine = Engine::new(&uncapped_config(), Box::new(window));
    engine.run();

    assert!(!engine.is_running());
}

#[test]
fn fixed_updates_drain_once_per_interval() {
    let window = window_800x600();
    let mut engine = Engine::new(&uncapped_config(), Box::new(window));

    let updates = Rc::new(Cell::new(0));
    engine.handler_mut().add(
        "counter",
        Box::new(CountingObject {
            movement: Movement::new(Vec2::ZERO),
            updates: updates.clone(),
        }),
        true,
    );

    // Two pending intervals plus a little, fed directly into the clock.
    engine.clock_mut().advance(1100.0);
    engine.frame();

    assert_eq!(updates.get(), 2);
    assert!(engine.clock().lag_ms() < 500.0);
}

#[test]
fn catch_up_is_capped_and_excess_lag_dropped() {
    let window = window_800x600();
    let mut config = uncapped_config();
    config.max_catchup_steps = 3;
    let mut engine = Engine::new(&config, Box::new(window));

    let updates = Rc::new(Cell::new(0));
    engine.handler_mut().add(
        "counter",
        Box::new(CountingObject {
            movement: Movement::new(Vec2::ZERO),
            updates: updates.clone(),
        }),
        true,
    );

    // Ten intervals of debt would be ten updates; the cap holds it to 3
    // and the rest of the debt is discarded.
    engine.clock_mut().advance(5000.0);
    engine.frame();

    assert_eq!(updates.get(), 3);
    assert!(engine.clock().lag_ms() < 500.0);
}

#[test]
fn resize_event_updates_window_dimension() {
    let mut window = window_800x600();
    window.push_event(WindowEvent::Resized(Vec2::new(1024.0, 768.0)));

    let mut engine = Engine::new(&uncapped_config(), Box::new(window));
    engine.frame();

    assert_eq!(engine.window().dim(), Vec2::new(1024.0, 768.0));
    assert_eq!(engine.window().center(), Vec2::new(512.0, 384.0));
}
