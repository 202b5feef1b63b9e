//! Engine services.
//!
//! Long-lived subsystems registered once at start-up and looked up through
//! the [`registry`](registry::ServiceRegistry).
//!
//! Overview
//! - `registry` – type-keyed singleton store (the application context)
//! - `time` – fixed-timestep clock and frame pacing
//! - `image` – named image store over backend surfaces
//! - `colour` – named colour store with a visible error sentinel
//! - `audio` – background audio thread bridge
//! - `storage` – JSON-backed persistent key-value store

pub mod audio;
pub mod colour;
pub mod image;
pub mod registry;
pub mod storage;
pub mod time;
