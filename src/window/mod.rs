//! Window and display abstraction.
//!
//! The engine core talks to the display backend through the [`Window`]
//! trait: surface creation, blitting, frame presentation, and event/input
//! polling. Two implementations exist:
//! - [`raylib::RaylibWindow`] – the real windowed backend.
//! - [`headless::HeadlessWindow`] – records draw calls; used by tests and
//!   the `--headless` smoke run.
//!
//! Surfaces are referred to by opaque [`SurfaceId`] handles minted by the
//! backend, so the simulation core never holds backend texture types.

pub mod headless;
#[cfg(any(target_os = "linux", target_os = "windows"))]
pub mod raylib;

use glam::Vec2;
use smallvec::SmallVec;

use crate::error::EngineError;
use crate::services::colour::Rgb;

/// Opaque handle to a backend-owned drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

/// Window-level events drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    CloseRequested,
    /// The window surface changed size; payload is the new dimension.
    Resized(Vec2),
}

/// Keys the engine loop and demo glue care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
}

/// Snapshot of held keys, taken once per fixed update.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: SmallVec<[Key; 8]>,
}

impl InputSnapshot {
    /// Build a snapshot from the currently held keys.
    pub fn from_held(held: impl IntoIterator<Item = Key>) -> Self {
        Self {
            held: held.into_iter().collect(),
        }
    }

    /// Whether `key` was held when the snapshot was taken.
    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether no keys were held.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// Display backend consumed by the engine core.
///
/// `fill` and `blit` record into the current frame; `present` flushes it to
/// the screen. Backends may buffer internally (the raylib backend replays
/// buffered commands inside its drawing scope).
pub trait Window {
    /// Current window dimension in pixels.
    fn dim(&self) -> Vec2;

    /// Window centre in pixels; the origin for cameraless drawing.
    fn center(&self) -> Vec2 {
        self.dim() * 0.5
    }

    /// Re-read the surface size after a resize event. Returns the new
    /// dimension.
    fn resize(&mut self) -> Vec2;

    /// Queue a full-window background fill for this frame.
    fn fill(&mut self, colour: Rgb);

    /// Queue a surface blit at `pos` (top-left, pixels) for this frame.
    fn blit(&mut self, surface: SurfaceId, pos: Vec2);

    /// Flush the queued frame to the screen.
    fn present(&mut self);

    /// Drain pending window events.
    fn poll_events(&mut self) -> SmallVec<[WindowEvent; 4]>;

    /// Snapshot the currently held keys.
    fn input(&self) -> InputSnapshot;

    /// Load an image file into a backend surface. Returns the handle and
    /// the image dimension in pixels.
    fn load_surface(&mut self, path: &str) -> Result<(SurfaceId, Vec2), EngineError>;

    /// Create a solid-colour surface (debug outlines, placeholders).
    fn create_solid_surface(&mut self, dim: Vec2, colour: Rgb) -> SurfaceId;

    /// Dimension of a previously created surface, if the handle is valid.
    fn surface_dim(&self, surface: SurfaceId) -> Option<Vec2>;
}
