//! Engine error taxonomy.
//!
//! Three failure classes cover the core:
//! - [`EngineError::Configuration`] – a required service or setting is
//!   missing. Treated as fatal at start-up; callers propagate it out of
//!   `main` instead of recovering.
//! - [`EngineError::Validation`] – a value failed a shape/range check.
//!   Checked call paths log it and return a sentinel instead of raising.
//! - [`EngineError::Reference`] – a name resolved to nothing, or to an
//!   object of the wrong kind (e.g. a non-camera assigned as the active
//!   camera). The operation is rejected and prior state is left unchanged.

use std::fmt;

/// Error type shared by the engine core and its services.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A service or setting required at start-up is absent.
    Configuration(String),
    /// A value failed validation (wrong shape, range, or key).
    Validation(String),
    /// A name did not resolve, or resolved to the wrong kind of object.
    Reference(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            EngineError::Validation(msg) => write!(f, "validation error: {}", msg),
            EngineError::Reference(msg) => write!(f, "reference error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
