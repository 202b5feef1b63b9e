//! Game object collection, camera assignment, and draw composition.
//!
//! The handler owns every live game object by name, tracks which one (if
//! any) is the active camera, and turns the object set into an ordered
//! stream of blits each frame: sort by world Y (painter's depth for
//! top-down scenes), cull against the window, transform through the active
//! camera, blit.
//!
//! Accessors come in two modes, mirroring the rest of the engine: the
//! checked path (`safety_check = true`, the default choice) logs and
//! returns `None`/no-ops on a missing name; the unchecked path panics and
//! is meant for hot paths where the caller has already validated the name.

use glam::Vec2;
use log::{error, info, warn};
use rustc_hash::FxHashMap;

use crate::objects::camera::Camera;
use crate::objects::game_object::{GameObject, UpdateCtx};
use crate::window::Window;

/// Name-keyed set of game objects plus the active-camera designation.
#[derive(Default)]
pub struct GameObjectHandler {
    game_objects: FxHashMap<String, Box<dyn GameObject>>,
    camera: Option<String>,
}

impl GameObjectHandler {
    /// Create an empty handler with no active camera.
    pub fn new() -> Self {
        Self {
            game_objects: FxHashMap::default(),
            camera: None,
        }
    }

    /// Insert an object under `name`.
    ///
    /// Inserting over an existing name replaces the object wholesale; with
    /// `safety_check` the replacement is logged as a warning and a fresh
    /// add at info level.
    pub fn add(&mut self, name: impl Into<String>, object: Box<dyn GameObject>, safety_check: bool) {
        let name = name.into();
        if safety_check {
            if self.game_objects.contains_key(&name) {
                warn!("Game object '{}' already exists and has been replaced.", name);
            } else {
                info!("Game object '{}' has been added.", name);
            }
        }
        self.game_objects.insert(name, object);
    }

    /// Look up an object.
    ///
    /// The unchecked path (`safety_check = false`) panics on a missing
    /// name; the checked path logs an error and returns `None`.
    pub fn get(&self, name: &str, safety_check: bool) -> Option<&dyn GameObject> {
        if !safety_check {
            return Some(
                self.game_objects
                    .get(name)
                    .unwrap_or_else(|| panic!("game object '{}' does not exist", name))
                    .as_ref(),
            );
        }
        match self.game_objects.get(name) {
            Some(object) => Some(object.as_ref()),
            None => {
                error!("Game object '{}' does not exist.", name);
                None
            }
        }
    }

    /// Mutable lookup; same modes as [`get`](Self::get).
    pub fn get_mut(&mut self, name: &str, safety_check: bool) -> Option<&mut dyn GameObject> {
        if !safety_check {
            return Some(
                self.game_objects
                    .get_mut(name)
                    .unwrap_or_else(|| panic!("game object '{}' does not exist", name))
                    .as_mut(),
            );
        }
        match self.game_objects.get_mut(name) {
            Some(object) => Some(object.as_mut()),
            None => {
                error!("Game object '{}' does not exist.", name);
                None
            }
        }
    }

    /// Remove an object by name, returning it.
    ///
    /// The checked path logs the removal, or logs and no-ops when the name
    /// is missing. Removing the active camera unsets it.
    pub fn remove(&mut self, name: &str, safety_check: bool) -> Option<Box<dyn GameObject>> {
        let removed = if !safety_check {
            Some(
                self.game_objects
                    .remove(name)
                    .unwrap_or_else(|| panic!("game object '{}' does not exist", name)),
            )
        } else {
            match self.game_objects.remove(name) {
                Some(object) => {
                    info!("Game object '{}' removed.", name);
                    Some(object)
                }
                None => {
                    info!(
                        "Game object '{}' could not be removed, as it doesn't exist.",
                        name
                    );
                    None
                }
            }
        };

        if removed.is_some() && self.camera.as_deref() == Some(name) {
            warn!("Active camera '{}' was removed; camera unset.", name);
            self.camera = None;
        }
        removed
    }

    /// Number of owned objects.
    pub fn len(&self) -> usize {
        self.game_objects.len()
    }

    /// Whether the handler owns no objects.
    pub fn is_empty(&self) -> bool {
        self.game_objects.is_empty()
    }

    /// Designate the active camera, or unset it with `None`.
    ///
    /// The ident must resolve to an object that is a camera; anything else
    /// is logged as an error and the previous designation stays unchanged.
    /// Unsetting is legal but unusual, so it logs a warning: objects then
    /// draw relative to the window centre with no pan or zoom.
    pub fn set_camera(&mut self, ident: Option<&str>) {
        match ident {
            None => {
                self.camera = None;
                warn!("Camera has been unset.");
            }
            Some(name) => {
                let is_camera = self
                    .game_objects
                    .get(name)
                    .map(|object| object.as_camera().is_some())
                    .unwrap_or(false);
                if is_camera {
                    self.camera = Some(name.to_string());
                    info!("Camera has been set to '{}'.", name);
                } else {
                    error!(
                        "'{}' is not a valid camera. It must exist in the handler and be a camera object.",
                        name
                    );
                }
            }
        }
    }

    /// Ident of the active camera, if set.
    pub fn camera_ident(&self) -> Option<&str> {
        self.camera.as_deref()
    }

    /// The active camera object, if set.
    pub fn active_camera(&self) -> Option<&Camera> {
        self.camera
            .as_deref()
            .and_then(|name| self.game_objects.get(name))
            .and_then(|object| object.as_camera())
    }

    /// Run one fixed update over every object, unconditionally.
    pub fn update(&mut self, ctx: &UpdateCtx) {
        for object in self.game_objects.values_mut() {
            object.update(ctx);
        }
    }

    /// Draw every visible object to the window.
    ///
    /// Objects are sorted by the world Y of their movement (ascending, ties
    /// broken by name for determinism): objects further down draw later and
    /// end up on top. The active camera itself is skipped, hidden objects
    /// are skipped, and anything fully outside the window rect is culled
    /// before its `draw` hook runs.
    pub fn draw_to_window(&mut self, window: &mut dyn Window, interpolation: f32) {
        let center = window.center();
        let win_dim = window.dim();
        let camera = self.camera_snapshot();

        let mut order: Vec<(String, f32)> = self
            .game_objects
            .iter()
            .map(|(name, object)| (name.clone(), object.movement().pos().y))
            .collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        for (name, _y) in order {
            if self.camera.as_deref() == Some(name.as_str()) {
                continue;
            }
            let Some(object) = self.game_objects.get_mut(&name) else {
                continue;
            };
            if !object.display() {
                continue;
            }

            let draw_pos = object.movement().draw_pos(interpolation);
            let screen = screen_pos(draw_pos, camera, center);
            if !rect_on_window(screen, object.movement().dim(), win_dim) {
                continue;
            }

            if let Some(surface) = object.draw() {
                window.blit(surface, screen.floor());
            }
        }
    }

    /// Advance every object's interpolation baseline. Called once per
    /// rendered frame, after drawing.
    pub fn commit_frame(&mut self) {
        for object in self.game_objects.values_mut() {
            object.movement_mut().commit_frame();
        }
    }

    /// Whether the named object would appear on the window this frame.
    ///
    /// False when the name is missing (logged), the object is hidden, or
    /// its screen rect lies fully outside the window.
    pub fn is_visible(&self, name: &str, interpolation: f32, window: &dyn Window) -> bool {
        let Some(object) = self.get(name, true) else {
            return false;
        };
        if !object.display() {
            return false;
        }

        let draw_pos = object.movement().draw_pos(interpolation);
        let screen = screen_pos(draw_pos, self.camera_snapshot(), window.center());
        rect_on_window(screen, object.movement().dim(), window.dim())
    }

    fn camera_snapshot(&self) -> Option<(Vec2, f32)> {
        self.active_camera()
            .map(|camera| (camera.movement().pos(), camera.scale()))
    }
}

fn screen_pos(draw_pos: Vec2, camera: Option<(Vec2, f32)>, center: Vec2) -> Vec2 {
    match camera {
        Some((cam_pos, scale)) => center + (draw_pos - cam_pos) * scale,
        None => draw_pos + center,
    }
}

fn rect_on_window(pos: Vec2, dim: Vec2, window_dim: Vec2) -> bool {
    let max = pos + dim;
    !(max.x < 0.0 || pos.x > window_dim.x || max.y < 0.0 || pos.y > window_dim.y)
}
