//! Named image registry.
//!
//! Maps image names to backend surface handles plus their pixel dimensions.
//! Surfaces themselves are owned by the [`Window`](crate::window::Window)
//! backend; this store only tracks the name -> handle association, so it can
//! be exercised headless.
//!
//! Unlike the colour store, adding under an existing name is rejected (the
//! existing image is kept) – images are loaded once during setup and an
//! accidental re-load usually means two call sites disagree about a name.

use std::path::Path;

use glam::Vec2;
use log::{error, info, warn};
use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::window::{SurfaceId, Window};

/// A registered image: backend surface handle plus pixel dimension.
#[derive(Debug, Clone, Copy)]
pub struct Image {
    pub surface: SurfaceId,
    pub dim: Vec2,
}

/// String-keyed image store.
#[derive(Default)]
pub struct ImageService {
    images: FxHashMap<String, Image>,
}

impl ImageService {
    /// Create an empty image store.
    pub fn new() -> Self {
        Self {
            images: FxHashMap::default(),
        }
    }

    /// Register a surface under `name`.
    ///
    /// A name that already exists is rejected with a warning and the
    /// existing image is kept.
    pub fn add(&mut self, name: impl Into<String>, surface: SurfaceId, dim: Vec2) {
        let name = name.into();
        if self.images.contains_key(&name) {
            warn!("Image '{}' already exists. Image not created.", name);
            return;
        }
        info!("Image '{}' added ({}x{}).", name, dim.x, dim.y);
        self.images.insert(name, Image { surface, dim });
    }

    /// Load an image file through the window backend and register it.
    ///
    /// When `name` is `None` the file stem is used.
    pub fn add_from_file(
        &mut self,
        window: &mut dyn Window,
        path: &str,
        name: Option<&str>,
    ) -> Result<(), EngineError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => Path::new(path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    EngineError::Validation(format!("image path '{}' has no file stem", path))
                })?,
        };
        let (surface, dim) = window.load_surface(path)?;
        self.add(name, surface, dim);
        Ok(())
    }

    /// Look up an image by name.
    ///
    /// Unknown names log an error and return `None`; callers skip the blit
    /// rather than crash.
    pub fn get(&self, name: &str) -> Option<Image> {
        match self.images.get(name) {
            Some(image) => Some(*image),
            None => {
                error!("Image '{}' doesn't exist.", name);
                None
            }
        }
    }

    /// Whether `name` is registered.
    pub fn is_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Remove an image by name. Removing an unknown name logs a warning.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.images.remove(name).is_some() {
            info!("Image '{}' deleted.", name);
            true
        } else {
            warn!("Image '{}' doesn't exist.", name);
            false
        }
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
