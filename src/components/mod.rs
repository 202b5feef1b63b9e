//! Components attached to game objects.
//!
//! Submodules overview:
//! - [`movement`] – position state with render interpolation and origin
//!   alignment
//! - [`animation`] – timed frame sequences and per-object animation sets

pub mod animation;
pub mod movement;
