//! Frame animation over named images.
//!
//! An [`Animation`] is an ordered list of image frames played over a fixed
//! length of real time. Frame names are resolved against the
//! [`ImageService`](crate::services::image::ImageService) once, when the
//! frames are set; a missing image rejects the whole frame list so a typo
//! surfaces at setup instead of mid-game.
//!
//! [`AnimationSet`] groups named animations on one object with a current
//! and a default selection, mirroring how sprites switch between walk/idle
//! cycles.

use log::{error, info, warn};
use rustc_hash::FxHashMap;

use crate::services::image::ImageService;
use crate::window::SurfaceId;

#[derive(Debug, Clone)]
struct Frame {
    name: String,
    surface: SurfaceId,
}

/// A timed sequence of image frames.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    length_ms: f64,
    repeat: bool,
    start_ms: f64,
    finished: bool,
}

impl Animation {
    /// Create an empty animation of `length_ms` total duration.
    ///
    /// `repeat = false` clamps to the last frame once the duration elapses
    /// and marks the animation [`finished`](Self::is_finished).
    pub fn new(length_ms: f64, repeat: bool) -> Self {
        Self {
            frames: Vec::new(),
            length_ms: length_ms.max(1.0),
            repeat,
            start_ms: 0.0,
            finished: false,
        }
    }

    /// Set the frame list, resolving each name against the image store.
    ///
    /// Any unknown image rejects the whole list (error logged, previous
    /// frames kept). Returns whether the frames were accepted.
    pub fn set_frames<S: AsRef<str>>(&mut self, names: &[S], images: &ImageService) -> bool {
        let mut frames = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let Some(image) = images.get(name) else {
                error!(
                    "Image '{}' does not exist. Animation frames could not be set.",
                    name
                );
                return false;
            };
            frames.push(Frame {
                name: name.to_string(),
                surface: image.surface,
            });
        }
        info!(
            "Animation frames set to {:?}.",
            frames.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
        );
        self.frames = frames;
        true
    }

    /// Restart the animation from `now_ms`.
    pub fn reset(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.finished = false;
    }

    /// Frame to show at `now_ms`, or `None` when no frames are set.
    pub fn current_frame(&mut self, now_ms: f64) -> Option<SurfaceId> {
        if self.frames.is_empty() {
            return None;
        }

        let elapsed = now_ms - self.start_ms;
        if !self.repeat && elapsed >= self.length_ms {
            self.finished = true;
            return self.frames.last().map(|frame| frame.surface);
        }

        let elapsed = elapsed.rem_euclid(self.length_ms);
        let frame_duration = self.length_ms / self.frames.len() as f64;
        let index = ((elapsed / frame_duration) as usize).min(self.frames.len() - 1);
        Some(self.frames[index].surface)
    }

    /// Whether a non-repeating animation has played through.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Named animations with a current and a default selection.
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animations: FxHashMap<String, Animation>,
    current: Option<String>,
    default: Option<String>,
}

impl AnimationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation under `name`; replacing logs a warning.
    pub fn add(&mut self, name: impl Into<String>, animation: Animation) {
        let name = name.into();
        if self.animations.contains_key(&name) {
            warn!("Animation '{}' replaced.", name);
        } else {
            info!("Animation '{}' added.", name);
        }
        self.animations.insert(name, animation);
    }

    /// Remove an animation; removing an unknown name logs a warning.
    pub fn remove(&mut self, name: &str) {
        if self.animations.remove(name).is_some() {
            info!("Animation '{}' removed.", name);
            if self.current.as_deref() == Some(name) {
                self.current = None;
            }
            if self.default.as_deref() == Some(name) {
                self.default = None;
            }
        } else {
            warn!(
                "Animation '{}' could not be removed as it does not exist.",
                name
            );
        }
    }

    /// Select the current animation.
    ///
    /// Unknown names log an error and leave the selection unchanged.
    /// Selecting a different animation (or passing `reset = true`) restarts
    /// it from `now_ms`.
    pub fn set_current(&mut self, name: &str, reset: bool, now_ms: f64) {
        if !self.animations.contains_key(name) {
            error!("Animation '{}' does not exist. Animation not set.", name);
            return;
        }
        if reset || self.current.as_deref() != Some(name) {
            self.current = Some(name.to_string());
            if let Some(animation) = self.animations.get_mut(name) {
                animation.reset(now_ms);
            }
        }
    }

    /// Select the fallback animation used when no current one is set.
    pub fn set_default(&mut self, name: &str) {
        if !self.animations.contains_key(name) {
            error!("Animation '{}' does not exist. Animation not set.", name);
            return;
        }
        self.default = Some(name.to_string());
    }

    /// Name of the current animation, if any.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Frame of the current (or default) animation at `now_ms`.
    pub fn current_frame(&mut self, now_ms: f64) -> Option<SurfaceId> {
        let name = match (&self.current, &self.default) {
            (Some(current), _) => current.clone(),
            (None, Some(default)) => {
                warn!(
                    "Current animation is not set. Falling back to default animation '{}'.",
                    default
                );
                default.clone()
            }
            (None, None) => return None,
        };
        self.animations
            .get_mut(&name)
            .and_then(|animation| animation.current_frame(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn images_with(names: &[&str]) -> ImageService {
        let mut images = ImageService::new();
        for (i, name) in names.iter().enumerate() {
            images.add(*name, SurfaceId(i as u32), Vec2::new(8.0, 8.0));
        }
        images
    }

    #[test]
    fn set_frames_rejects_unknown_images() {
        let images = images_with(&["a"]);
        let mut animation = Animation::new(1000.0, true);

        assert!(!animation.set_frames(&["a", "missing"], &images));
        assert_eq!(animation.frame_count(), 0);
    }

    #[test]
    fn frames_advance_with_time_and_wrap() {
        let images = images_with(&["a", "b"]);
        let mut animation = Animation::new(1000.0, true);
        assert!(animation.set_frames(&["a", "b"], &images));

        assert_eq!(animation.current_frame(0.0), Some(SurfaceId(0)));
        assert_eq!(animation.current_frame(600.0), Some(SurfaceId(1)));
        // Wraps past the total length.
        assert_eq!(animation.current_frame(1100.0), Some(SurfaceId(0)));
        assert!(!animation.is_finished());
    }

    #[test]
    fn non_repeating_animation_clamps_and_finishes() {
        let images = images_with(&["a", "b"]);
        let mut animation = Animation::new(1000.0, false);
        assert!(animation.set_frames(&["a", "b"], &images));

        assert_eq!(animation.current_frame(1500.0), Some(SurfaceId(1)));
        assert!(animation.is_finished());

        animation.reset(2000.0);
        assert!(!animation.is_finished());
        assert_eq!(animation.current_frame(2000.0), Some(SurfaceId(0)));
    }

    #[test]
    fn falls_back_to_default_animation() {
        let images = images_with(&["a"]);
        let mut idle = Animation::new(500.0, true);
        assert!(idle.set_frames(&["a"], &images));

        let mut set = AnimationSet::new();
        set.add("idle", idle);
        set.set_default("idle");

        assert_eq!(set.current_frame(0.0), Some(SurfaceId(0)));
        assert_eq!(set.current_name(), None);
    }

    #[test]
    fn selecting_unknown_animation_keeps_selection() {
        let images = images_with(&["a"]);
        let mut idle = Animation::new(500.0, true);
        assert!(idle.set_frames(&["a"], &images));

        let mut set = AnimationSet::new();
        set.add("idle", idle);
        set.set_current("idle", false, 0.0);
        set.set_current("ghost", false, 0.0);

        assert_eq!(set.current_name(), Some("idle"));
    }
}
