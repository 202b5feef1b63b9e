//! Sprite objects: static and animated.

use glam::Vec2;

use crate::components::animation::AnimationSet;
use crate::components::movement::Movement;
use crate::objects::game_object::{GameObject, UpdateCtx};
use crate::services::image::Image;
use crate::window::SurfaceId;

/// Game object drawing a single fixed image.
pub struct SpriteObject {
    ident: String,
    movement: Movement,
    display: bool,
    surface: SurfaceId,
}

impl SpriteObject {
    /// Create a sprite at `pos` showing `image`. The movement dimension is
    /// taken from the image so alignment and culling match the pixels.
    pub fn new(ident: impl Into<String>, pos: Vec2, image: Image) -> Self {
        Self {
            ident: ident.into(),
            movement: Movement::new(pos).with_dim(image.dim),
            display: true,
            surface: image.surface,
        }
    }

    /// Replace the displayed image.
    pub fn set_image(&mut self, image: Image) {
        self.surface = image.surface;
        self.movement.set_dim(image.dim);
    }
}

impl GameObject for SpriteObject {
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
        self.display
    }

    fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    fn draw(&mut self) -> Option<SurfaceId> {
        Some(self.surface)
    }
}

/// Game object drawing the current frame of an [`AnimationSet`].
///
/// Frame time advances with the fixed-update batches, so the shown frame is
/// resolved from the clock time cached by the latest `update`.
pub struct AnimatedObject {
    ident: String,
    movement: Movement,
    display: bool,
    animations: AnimationSet,
    now_ms: f64,
}

impl AnimatedObject {
    /// Create an animated object at `pos` with the given frame dimension.
    pub fn new(ident: impl Into<String>, pos: Vec2, dim: Vec2) -> Self {
        Self {
            ident: ident.into(),
            movement: Movement::new(pos).with_dim(dim),
            display: true,
            animations: AnimationSet::new(),
            now_ms: 0.0,
        }
    }

    /// The animation set, for setup and state switches.
    pub fn animations_mut(&mut self) -> &mut AnimationSet {
        &mut self.animations
    }

    /// Read access to the animation set.
    pub fn animations(&self) -> &AnimationSet {
        &self.animations
    }
}

impl GameObject for AnimatedObject {
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
        self.display
    }

    fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    fn update(&mut self, ctx: &UpdateCtx) {
        self.now_ms = ctx.now_ms;
    }

    fn draw(&mut self) -> Option<SurfaceId> {
        self.animations.current_frame(self.now_ms)
    }
}
