use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::component::{Component, ComponentRole};
use crate::registry::error::RegistryError;

/// Shared constructor producing a fresh component instance
pub type Factory = Arc<dyn Fn() -> Box<dyn Component> + Send + Sync>;

/// Concurrency-safe catalog of named component factories.
///
/// Writers (`register`, `unregister`) take the lock exclusively, every other
/// operation takes it shared. Each operation holds the lock for its whole
/// duration, so a successful `register` is visible to every later read.
#[derive(Default)]
pub struct Registry {
    factories: RwLock<HashMap<String, Factory>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory closure under `name`
    pub fn register<F>(&self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.register_factory(name, Arc::new(factory))
    }

    /// Register an already shared factory under `name`.
    ///
    /// Fails with `AlreadyRegistered` if the name is taken; the existing
    /// entry is left untouched.
    pub fn register_factory(
        &self,
        name: impl Into<String>,
        factory: Factory,
    ) -> Result<(), RegistryError> {
        let mut factories = self.factories.write();
        match factories.entry(name.into()) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyRegistered {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(factory);
                Ok(())
            }
        }
    }

    /// Remove `name` if present
    pub fn unregister(&self, name: &str) {
        self.factories.write().remove(name);
    }

    pub fn get(&self, name: &str) -> Result<Factory, RegistryError> {
        self.factories
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Look up `name` and build a new instance from its factory
    pub fn create(&self, name: &str) -> Result<Box<dyn Component>, RegistryError> {
        let factories = self.factories.read();
        let factory = factories.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        Ok(factory())
    }

    /// Registered names, in no particular order
    pub fn list(&self) -> Vec<String> {
        self.factories.read().keys().cloned().collect()
    }

    /// Names whose components report `role`.
    ///
    /// Builds one throwaway instance per entry to read its descriptor.
    pub fn list_by_type(&self, role: ComponentRole) -> Vec<String> {
        self.factories
            .read()
            .iter()
            .filter(|(_, factory)| factory().info().role == role)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.factories.read().len()
    }

    pub fn count_by_type(&self, role: ComponentRole) -> usize {
        self.list_by_type(role).len()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Registry");
        match self.factories.try_read() {
            Some(factories) => debug.field("count", &factories.len()),
            None => debug.field("count", &format_args!("<locked>")),
        };
        debug.finish_non_exhaustive()
    }
}
