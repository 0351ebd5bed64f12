//! The process-wide attribute registry.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::{AttributeKind, KindDescriptor};
use crate::logging::targets;

/// Global attribute registry.
static REGISTRY: OnceLock<AttributeRegistry> = OnceLock::new();

/// Catalogue mapping attribute kind names to their descriptors.
///
/// Registration is expected to finish during start-up, before styles that
/// reference the registered names are decoded. The table sits behind a
/// read-write lock, so late registration from another thread is safe; it just
/// offers no ordering guarantee relative to concurrent readers.
pub struct AttributeRegistry {
    kinds: RwLock<HashMap<Arc<str>, Arc<KindDescriptor>>>,
}

impl AttributeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            kinds: RwLock::new(HashMap::new()),
        }
    }

    /// Register `kind`, replacing any descriptor already stored under its name.
    pub fn register<K: AttributeKind>(&self, kind: &K) {
        self.register_descriptor(KindDescriptor::of(kind));
    }

    /// Register a prepared descriptor. Last writer wins.
    pub fn register_descriptor(&self, descriptor: KindDescriptor) {
        let name = descriptor.shared_name().clone();
        let descriptor = Arc::new(descriptor);
        let previous = self.kinds.write().insert(name.clone(), descriptor.clone());

        match previous {
            Some(previous) if previous.type_id() != descriptor.type_id() => {
                tracing::warn!(
                    target: targets::REGISTRY,
                    kind = %name,
                    previous = previous.type_name(),
                    current = descriptor.type_name(),
                    "attribute kind re-registered with a different value type"
                );
            }
            Some(_) => {
                tracing::debug!(target: targets::REGISTRY, kind = %name, "attribute kind re-registered");
            }
            None => {
                tracing::debug!(
                    target: targets::REGISTRY,
                    kind = %name,
                    value_type = descriptor.type_name(),
                    "attribute kind registered"
                );
            }
        }
    }

    /// Register several descriptors at once.
    pub fn register_all(&self, descriptors: impl IntoIterator<Item = KindDescriptor>) {
        for descriptor in descriptors {
            self.register_descriptor(descriptor);
        }
    }

    /// Look up the descriptor registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<KindDescriptor>> {
        self.kinds.read().get(name).cloned()
    }

    /// Check whether `name` is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.kinds.read().contains_key(name)
    }

    /// All registered names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.kinds.read().keys().map(|name| name.to_string()).collect();
        names.sort();
        names
    }

    /// Get the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.read().len()
    }

    /// Check if no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.read().is_empty()
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global attribute registry.
pub fn registry() -> &'static AttributeRegistry {
    REGISTRY.get_or_init(AttributeRegistry::new)
}

/// Register `kind` with the global registry.
pub fn register<K: AttributeKind>(kind: &K) {
    registry().register(kind);
}

/// Look up `name` in the global registry.
pub fn lookup(name: &str) -> Option<Arc<KindDescriptor>> {
    registry().lookup(name)
}

static_assertions::assert_impl_all!(AttributeRegistry: Send, Sync);
