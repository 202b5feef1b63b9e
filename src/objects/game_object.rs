//! Game object contract.
//!
//! The engine deals with a closed set of object kinds (sprites, animated
//! sprites, cameras, triggers) behind one trait. Dispatch is dynamic; the
//! camera kind is flagged explicitly through [`GameObject::as_camera`]
//! rather than discovered by downcasting.

use crate::components::movement::Movement;
use crate::objects::camera::Camera;
use crate::window::{InputSnapshot, SurfaceId};

/// Per-fixed-update context handed to every object's `update`.
pub struct UpdateCtx<'a> {
    /// Fixed simulation step, in seconds.
    pub fixed_dt: f32,
    /// Real elapsed time of the last rendered frame, in milliseconds.
    pub elapsed_ms: f32,
    /// Cumulative real time, in milliseconds.
    pub now_ms: f64,
    /// Keys held at the start of this update batch.
    pub input: &'a InputSnapshot,
}

/// Polymorphic entity owned by the
/// [`GameObjectHandler`](crate::objects::handler::GameObjectHandler).
pub trait GameObject {
    /// Identity string, set at construction.
    fn ident(&self) -> &str;

    /// The object's movement state.
    fn movement(&self) -> &Movement;

    /// Mutable movement state.
    fn movement_mut(&mut self) -> &mut Movement;

    /// Whether the object participates in drawing at all.
    fn display(&self) -> bool {
        true
    }

    /// Toggle drawing participation.
    fn set_display(&mut self, display: bool);

    /// Fixed-step simulation hook. Default: no behaviour.
    fn update(&mut self, _ctx: &UpdateCtx) {}

    /// Produce the surface to blit this frame, or `None` to skip.
    fn draw(&mut self) -> Option<SurfaceId> {
        None
    }

    /// The camera view of this object, when it is one.
    fn as_camera(&self) -> Option<&Camera> {
        None
    }

    /// Mutable camera view of this object, when it is one.
    fn as_camera_mut(&mut self) -> Option<&mut Camera> {
        None
    }
}
