//! Named colour registry.
//!
//! Colours are registered by arbitrary names during setup and resolved by
//! name at draw time. Lookup of an unknown name returns [`ERROR_COLOUR`]
//! instead of failing, so rendering degrades visibly (a magenta flash)
//! rather than crashing mid-frame.

use log::{error, info, warn};
use rustc_hash::FxHashMap;

/// An RGB triple, 8 bits per channel.
pub type Rgb = (u8, u8, u8);

/// Sentinel returned for unregistered colour names.
pub const ERROR_COLOUR: Rgb = (255, 0, 220);

/// Colour used for debug outlines (trigger bounds and the like).
pub const OUTLINE_COLOUR: Rgb = (255, 0, 0);

/// String-keyed colour store.
#[derive(Default)]
pub struct ColourService {
    colours: FxHashMap<String, Rgb>,
}

impl ColourService {
    /// Create an empty colour store.
    pub fn new() -> Self {
        Self {
            colours: FxHashMap::default(),
        }
    }

    /// Register a colour under `name`.
    ///
    /// Re-registering an existing name replaces the value and logs a
    /// warning; first-time additions log at info level.
    pub fn add_colour(&mut self, name: impl Into<String>, colour: Rgb) {
        let name = name.into();
        match self.colours.get(&name) {
            Some(previous) => warn!(
                "Colour '{}' already exists. Value {:?} replaced by {:?}.",
                name, previous, colour
            ),
            None => info!("Colour '{}' added as {:?}.", name, colour),
        }
        self.colours.insert(name, colour);
    }

    /// Resolve a colour by name.
    ///
    /// Unknown names log an error and return [`ERROR_COLOUR`].
    pub fn get_colour(&self, name: &str) -> Rgb {
        match self.colours.get(name) {
            Some(colour) => *colour,
            None => {
                error!("Colour '{}' does not exist.", name);
                ERROR_COLOUR
            }
        }
    }

    /// Remove a colour by name. Removing an unknown name logs and returns
    /// `false`.
    pub fn remove_colour(&mut self, name: &str) -> bool {
        if self.colours.remove(name).is_some() {
            info!("Colour '{}' has been removed.", name);
            true
        } else {
            info!("Colour '{}' does not exist.", name);
            false
        }
    }

    /// Whether `name` is registered.
    pub fn has_colour(&self, name: &str) -> bool {
        self.colours.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_colour_returns_error_sentinel() {
        let colours = ColourService::new();
        assert_eq!(colours.get_colour("nope"), ERROR_COLOUR);
    }

    #[test]
    fn add_then_get_returns_registered_value() {
        let mut colours = ColourService::new();
        colours.add_colour("sky", (30, 120, 200));
        assert_eq!(colours.get_colour("sky"), (30, 120, 200));
    }

    #[test]
    fn re_adding_replaces_the_value() {
        let mut colours = ColourService::new();
        colours.add_colour("sky", (30, 120, 200));
        colours.add_colour("sky", (10, 10, 10));
        assert_eq!(colours.get_colour("sky"), (10, 10, 10));
    }

    #[test]
    fn remove_reports_whether_the_name_existed() {
        let mut colours = ColourService::new();
        colours.add_colour("sky", (30, 120, 200));
        assert!(colours.remove_colour("sky"));
        assert!(!colours.remove_colour("sky"));
    }
}
