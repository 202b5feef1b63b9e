//! Camera object.
//!
//! A camera is a game object whose position and scale define the
//! world-to-screen transform every other object is drawn through. Cameras
//! never draw themselves.

use glam::Vec2;

use crate::components::movement::Movement;
use crate::objects::game_object::{GameObject, UpdateCtx};
use crate::window::Key;

/// Game object supplying the world-to-screen transform.
pub struct Camera {
    ident: String,
    movement: Movement,
    scale: f32,
    pan_speed: f32,
}

impl Camera {
    /// Create a camera at `pos`. `scale` is clamped to a minimum of 1.0.
    pub fn new(ident: impl Into<String>, pos: Vec2, scale: f32) -> Self {
        Self {
            ident: ident.into(),
            movement: Movement::new(pos),
            scale: scale.max(1.0),
            pan_speed: 0.0,
        }
    }

    /// Enable WASD panning at `speed` world units per second. Zero (the
    /// default) leaves the camera static.
    pub fn with_pan_speed(mut self, speed: f32) -> Self {
        self.pan_speed = speed;
        self
    }

    /// Current zoom factor (always >= 1.0).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the zoom factor, clamped to a minimum of 1.0.
    ///
    /// A no-op when the value is unchanged, so cached transforms are not
    /// invalidated for nothing.
    pub fn set_scale(&mut self, scale: f32) {
        if scale != self.scale {
            self.scale = scale.max(1.0);
        }
    }

    /// Adjust the zoom by a rate scaled with real frame time.
    ///
    /// Deliberately uses elapsed *render* time rather than the fixed step:
    /// zoom is cosmetic, not simulation state.
    pub fn adjust_scale(&mut self, rate: f32, elapsed_ms: f32) {
        self.set_scale(self.scale + rate * elapsed_ms);
    }

    /// Map a world position to a screen position.
    ///
    /// `screen = window_center + (world - camera_pos) * scale`. With the
    /// camera at the origin and scale 1 this is the identity plus the
    /// centre offset.
    pub fn world_to_screen(&self, world: Vec2, window_center: Vec2) -> Vec2 {
        window_center + (world - self.movement.pos()) * self.scale
    }
}

impl GameObject for Camera {
    fn ident(&self) -> &str {
        &self.ident
    }

    fn movement(&self) -> &Movement {
        &self.movement
    }

    fn movement_mut(&mut self) -> &mut Movement {
        &mut self.movement
    }

    fn display(&self) -> bool {
        false
    }

    fn set_display(&mut self, _display: bool) {
        // Cameras have nothing to draw.
    }

    fn update(&mut self, ctx: &UpdateCtx) {
        if self.pan_speed == 0.0 {
            return;
        }
        let mut velocity = Vec2::ZERO;
        if ctx.input.is_down(Key::W) {
            velocity.y -= self.pan_speed;
        }
        if ctx.input.is_down(Key::S) {
            velocity.y += self.pan_speed;
        }
        if ctx.input.is_down(Key::A) {
            velocity.x -= self.pan_speed;
        }
        if ctx.input.is_down(Key::D) {
            velocity.x += self.pan_speed;
        }
        self.movement.move_pos(velocity, ctx.fixed_dt);
    }

    fn as_camera(&self) -> Option<&Camera> {
        Some(self)
    }

    fn as_camera_mut(&mut self) -> Option<&mut Camera> {
        Some(self)
    }
}
