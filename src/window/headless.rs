//! Headless window backend.
//!
//! Records fills and blits instead of drawing them. Used by the integration
//! tests to assert on draw order and culling, and by the `--headless` CLI
//! smoke run where no display is available.

use glam::Vec2;
use smallvec::SmallVec;

use crate::error::EngineError;
use crate::services::colour::Rgb;

use super::{InputSnapshot, Key, SurfaceId, Window, WindowEvent};

/// A recorded blit: surface handle plus screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedBlit {
    pub surface: SurfaceId,
    pub pos: Vec2,
}

/// Window backend that records draw calls in memory.
pub struct HeadlessWindow {
    dim: Vec2,
    surfaces: Vec<Vec2>,
    blits: Vec<RecordedBlit>,
    fills: Vec<Rgb>,
    presented: u64,
    held: Vec<Key>,
    pending_events: Vec<WindowEvent>,
}

impl HeadlessWindow {
    /// Create a headless window of the given dimension.
    pub fn new(dim: Vec2) -> Self {
        Self {
            dim,
            surfaces: Vec::new(),
            blits: Vec::new(),
            fills: Vec::new(),
            presented: 0,
            held: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Mint a surface handle with the given dimension, without any pixel
    /// data behind it.
    pub fn add_surface(&mut self, dim: Vec2) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len() as u32);
        self.surfaces.push(dim);
        id
    }

    /// Blits recorded since the last [`take_blits`](Self::take_blits).
    pub fn blits(&self) -> &[RecordedBlit] {
        &self.blits
    }

    /// Drain and return the recorded blits.
    pub fn take_blits(&mut self) -> Vec<RecordedBlit> {
        std::mem::take(&mut self.blits)
    }

    /// Background fills recorded so far.
    pub fn fills(&self) -> &[Rgb] {
        &self.fills
    }

    /// Number of presented frames.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Simulate a key being held down.
    pub fn press(&mut self, key: Key) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    /// Simulate a key release.
    pub fn release(&mut self, key: Key) {
        self.held.retain(|held| *held != key);
    }

    /// Queue a window event for the next poll.
    pub fn push_event(&mut self, event: WindowEvent) {
        if let WindowEvent::Resized(dim) = event {
            self.dim = dim;
        }
        self.pending_events.push(event);
    }
}

impl Window for HeadlessWindow {
    fn dim(&self) -> Vec2 {
        self.dim
    }

    fn resize(&mut self) -> Vec2 {
        self.dim
    }

    fn fill(&mut self, colour: Rgb) {
        self.fills.push(colour);
    }

    fn blit(&mut self, surface: SurfaceId, pos: Vec2) {
        self.blits.push(RecordedBlit { surface, pos });
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn poll_events(&mut self) -> SmallVec<[WindowEvent; 4]> {
        self.pending_events.drain(..).collect()
    }

    fn input(&self) -> InputSnapshot {
        InputSnapshot::from_held(self.held.iter().copied())
    }

    fn load_surface(&mut self, path: &str) -> Result<(SurfaceId, Vec2), EngineError> {
        // No file access headless; mint a nominal 1x1 surface so setup code
        // written against the real backend still runs.
        let _ = path;
        let dim = Vec2::new(1.0, 1.0);
        Ok((self.add_surface(dim), dim))
    }

    fn create_solid_surface(&mut self, dim: Vec2, _colour: Rgb) -> SurfaceId {
        self.add_surface(dim)
    }

    fn surface_dim(&self, surface: SurfaceId) -> Option<Vec2> {
        self.surfaces.get(surface.0 as usize).copied()
    }
}
