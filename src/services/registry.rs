//! Service registry.
//!
//! A type-keyed singleton store owned by the [`Engine`](crate::engine::Engine)
//! and passed by reference to whatever needs it. There is deliberately no
//! process-wide global: construction order stays explicit and tests can build
//! as many isolated registries as they like.
//!
//! Lifecycle: populated once at engine start-up, read many times, cleared
//! only for teardown or between tests.

use std::any::{Any, TypeId, type_name};

use log::warn;
use rustc_hash::FxHashMap;

use crate::error::EngineError;

/// Type-keyed map of subsystem singletons.
///
/// At most one instance per type. A second `register` of the same type is
/// rejected with a warning and the first instance is retained; this catches
/// accidental double-initialisation instead of silently replacing a live
/// service.
///
/// Single-threaded by design; no locking.
#[derive(Default)]
pub struct ServiceRegistry {
    services: FxHashMap<TypeId, Box<dyn Any>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            services: FxHashMap::default(),
        }
    }

    /// Register a service instance under its type.
    ///
    /// Returns `true` if the instance was stored. A duplicate registration
    /// logs a warning, drops `instance`, and returns `false`.
    pub fn register<T: 'static>(&mut self, instance: T) -> bool {
        let key = TypeId::of::<T>();
        if self.services.contains_key(&key) {
            warn!(
                "Service '{}' is already registered; keeping the existing instance.",
                type_name::<T>()
            );
            return false;
        }
        self.services.insert(key, Box::new(instance));
        true
    }

    /// Fetch a registered service.
    ///
    /// An unregistered type is a programmer error surfaced immediately as
    /// [`EngineError::Configuration`]; start-up code propagates it instead
    /// of retrying.
    pub fn get<T: 'static>(&self) -> Result<&T, EngineError> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| {
                EngineError::Configuration(format!(
                    "service not registered: {}",
                    type_name::<T>()
                ))
            })
    }

    /// Fetch a registered service mutably.
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T, EngineError> {
        self.services
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or_else(|| {
                EngineError::Configuration(format!(
                    "service not registered: {}",
                    type_name::<T>()
                ))
            })
    }

    /// Whether a service of type `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    /// Drop every registered service. Teardown/tests only.
    pub fn clear(&mut self) {
        self.services.clear();
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
