//! Invisible trigger volumes.
//!
//! A trigger is an axis-aligned box that game logic queries for overlap; it
//! normally never draws. For development it can be made visible, in which
//! case it blits a solid outline-colour surface supplied by setup code.

use glam::Vec2;
use log::warn;

use crate::components::movement::{Alignment, Movement};
use crate::objects::game_object::GameObject;
use crate::window::SurfaceId;

/// Invisible AABB collider object.
pub struct Trigger {
    ident: String,
    movement: Movement,
    display: bool,
    outline: Option<SurfaceId>,
}

impl Trigger {
    /// Create a trigger box at `pos` (top-left aligned) of size `dim`.
    pub fn new(ident: impl Into<String>, pos: Vec2, dim: Vec2) -> Self {
        Self {
            ident: ident.into(),
            movement: Movement::new(pos).with_dim(dim).with_alignment(Alignment {
                top: true,
                left: true,
                ..Alignment::default()
            }),
            display: false,
            outline: None,
        }
    }

    /// Attach a debug surface (usually a solid outline-colour rect) shown
    /// when the trigger is displayed.
    pub fn with_outline(mut self, outline: SurfaceId) -> Self {
        self.outline = Some(outline);
        self
    }

    /// Whether `point` lies inside the trigger box.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.movement.pos();
        let max = min + self.movement.dim();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Whether another movement's box overlaps this trigger.
    pub fn overlaps(&self, other: &Movement) -> bool {
        let a_min = self.movement.pos();
        let a_max = a_min + self.movement.dim();
        let b_min = other.pos() + other.origin_offset();
        let b_max = b_min + other.dim();

        !(a_max.x < b_min.x || a_min.x > b_max.x || a_max.y < b_min.y || a_min.y > b_max.y)
    }
}

impl GameObject for Trigger {
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
        if display {
            warn!(
                "Trigger '{}' has display set to true. Trigger display is for development only.",
                self.ident
            );
        }
        self.display = display;
    }

    fn draw(&mut self) -> Option<SurfaceId> {
        self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_checks_the_box() {
        let trigger = Trigger::new("zone", Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));

        assert!(trigger.contains_point(Vec2::new(10.0, 10.0)));
        assert!(trigger.contains_point(Vec2::new(25.0, 25.0)));
        assert!(!trigger.contains_point(Vec2::new(31.0, 25.0)));
        assert!(!trigger.contains_point(Vec2::new(9.0, 9.0)));
    }

    #[test]
    fn overlaps_detects_intersection_and_separation() {
        let trigger = Trigger::new("zone", Vec2::ZERO, Vec2::new(10.0, 10.0));

        let mut near = Movement::new(Vec2::new(12.0, 5.0)).with_dim(Vec2::new(8.0, 8.0));
        // Centred origin: box spans x 8..16, overlapping the trigger.
        assert!(trigger.overlaps(&near));

        near.set_pos(Vec2::new(30.0, 5.0));
        assert!(!trigger.overlaps(&near));
    }

    #[test]
    fn triggers_start_hidden() {
        let trigger = Trigger::new("zone", Vec2::ZERO, Vec2::new(4.0, 4.0));
        assert!(!trigger.display());
    }
}
