//! Position state with render interpolation.
//!
//! Simulation moves the *current* position in fixed steps; rendering blends
//! between the *previous* and current positions using the clock's
//! interpolation fraction, so motion looks smooth even when the render rate
//! and the fixed-update rate disagree.
//!
//! [`Movement::draw_pos`] is a pure query and may be called any number of
//! times per frame. The interpolation baseline advances only in
//! [`Movement::commit_frame`], which the handler calls exactly once per
//! rendered frame after drawing.

use glam::Vec2;
use log::error;

/// Origin alignment flags.
///
/// By default the draw position represents the object's centre. Each set
/// flag moves the origin to that edge instead; flags on different axes
/// combine (e.g. top-left). Opposing flags on one axis are invalid: the
/// pair is rejected with a logged validation error and that axis falls back
/// to centred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alignment {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Alignment {
    fn sanitised(mut self) -> Self {
        if self.left && self.right {
            error!("Invalid alignment: 'left' and 'right' are opposing flags. Axis reset to centre.");
            self.left = false;
            self.right = false;
        }
        if self.top && self.bottom {
            error!("Invalid alignment: 'top' and 'bottom' are opposing flags. Axis reset to centre.");
            self.top = false;
            self.bottom = false;
        }
        self
    }
}

/// Per-object position, interpolation baseline, and origin transform.
#[derive(Debug, Clone)]
pub struct Movement {
    pos: Vec2,
    previous_pos: Vec2,
    dim: Vec2,
    alignment: Alignment,
    adjustment: Vec2,
}

impl Movement {
    /// Create movement state at `pos` with a zero dimension.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            previous_pos: pos,
            dim: Vec2::ZERO,
            alignment: Alignment::default(),
            adjustment: Vec2::ZERO,
        }
    }

    /// Set the object dimension used for alignment and culling.
    pub fn with_dim(mut self, dim: Vec2) -> Self {
        self.dim = dim;
        self
    }

    /// Set the origin alignment flags.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment.sanitised();
        self
    }

    /// Replace the origin alignment flags in place.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment.sanitised();
    }

    /// Set a pixel adjustment added on top of the alignment offset.
    pub fn with_adjustment(mut self, adjustment: Vec2) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Current simulation position.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Interpolation baseline (last committed position).
    pub fn previous_pos(&self) -> Vec2 {
        self.previous_pos
    }

    /// Object dimension.
    pub fn dim(&self) -> Vec2 {
        self.dim
    }

    /// Replace the object dimension.
    pub fn set_dim(&mut self, dim: Vec2) {
        self.dim = dim;
    }

    /// Overwrite the position.
    ///
    /// Does not touch the interpolation baseline: a teleport still blends
    /// from wherever the object was last drawn. Returns whether the
    /// position actually changed.
    pub fn set_pos(&mut self, pos: Vec2) -> bool {
        if pos != self.pos {
            self.pos = pos;
            return true;
        }
        false
    }

    /// Advance the position by `velocity * fixed_dt`.
    ///
    /// `fixed_dt` is the clock's fixed interval in seconds, so a velocity is
    /// a rate per simulated second regardless of render framerate. A zero
    /// velocity never mutates. Returns whether the object moved.
    pub fn move_pos(&mut self, velocity: Vec2, fixed_dt: f32) -> bool {
        if velocity.length_squared() > 0.0 {
            self.pos += velocity * fixed_dt;
            return true;
        }
        false
    }

    /// Interpolated draw position (top-left of the blit).
    ///
    /// Pure: blends previous -> current by `interpolation` (clamped to
    /// `[0, 1]` here, at the point of consumption) and applies the origin
    /// alignment offset. Never mutates; call as often as needed.
    pub fn draw_pos(&self, interpolation: f32) -> Vec2 {
        let t = interpolation.clamp(0.0, 1.0);
        let blended = self.previous_pos + (self.pos - self.previous_pos) * t;
        blended + self.origin_offset()
    }

    /// Advance the interpolation baseline to the current position.
    ///
    /// Called once per rendered frame by the handler, after every draw for
    /// that frame has sampled [`draw_pos`](Self::draw_pos).
    pub fn commit_frame(&mut self) {
        self.previous_pos = self.pos;
    }

    /// Offset from the raw position to the blit top-left, per the alignment
    /// flags plus the pixel adjustment.
    pub fn origin_offset(&self) -> Vec2 {
        let x = if self.alignment.left {
            0.0
        } else if self.alignment.right {
            -self.dim.x
        } else {
            -self.dim.x * 0.5
        };
        let y = if self.alignment.top {
            0.0
        } else if self.alignment.bottom {
            -self.dim.y
        } else {
            -self.dim.y * 0.5
        };
        Vec2::new(x, y) + self.adjustment
    }
}
