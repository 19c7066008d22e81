use std::collections::BTreeMap;

use crate::component::{Component, ComponentRole};
use crate::registry::error::RegistryError;
use crate::registry::store::Registry;

/// Component count per role, every role present
pub type Summary = BTreeMap<ComponentRole, usize>;

/// One [`Registry`] per component role.
///
/// Built once by the application context and shared by reference; there is
/// no process-global instance.
#[derive(Debug, Default)]
pub struct RoleRegistries {
    receivers: Registry,
    processors: Registry,
    exporters: Registry,
    extensions: Registry,
    connectors: Registry,
}

impl RoleRegistries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding components of `role`
    pub fn get(&self, role: ComponentRole) -> &Registry {
        match role {
            ComponentRole::Receiver => &self.receivers,
            ComponentRole::Processor => &self.processors,
            ComponentRole::Exporter => &self.exporters,
            ComponentRole::Extension => &self.extensions,
            ComponentRole::Connector => &self.connectors,
        }
    }

    pub fn register_receiver<F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.receivers.register(name, factory)
    }

    pub fn register_processor<F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.processors.register(name, factory)
    }

    pub fn register_exporter<F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.exporters.register(name, factory)
    }

    pub fn register_extension<F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.extensions.register(name, factory)
    }

    pub fn register_connector<F>(
        &self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Component> + Send + Sync + 'static,
    {
        self.connectors.register(name, factory)
    }

    /// Count per role.
    ///
    /// Each registry is read on its own, so concurrent registrations may land
    /// between two roles' reads.
    pub fn summary(&self) -> Summary {
        ComponentRole::ALL
            .into_iter()
            .map(|role| (role, self.get(role).count()))
            .collect()
    }

    /// Total number of registered components across all roles
    pub fn total(&self) -> usize {
        self.summary().values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::testing::factory;

    #[test]
    fn empty_summary_lists_every_role_with_zero() {
        let registries = RoleRegistries::new();

        let summary = registries.summary();

        assert_eq!(summary.len(), 5);
        assert!(ComponentRole::ALL.iter().all(|role| summary[role] == 0));
    }

    #[test]
    fn helpers_register_into_matching_registry() {
        let registries = RoleRegistries::new();

        registries
            .register_receiver("otlp", factory("otlp", ComponentRole::Receiver))
            .unwrap();
        registries
            .register_processor("batch", factory("batch", ComponentRole::Processor))
            .unwrap();
        registries
            .register_exporter("debug", factory("debug", ComponentRole::Exporter))
            .unwrap();
        registries
            .register_extension("health_check", factory("health_check", ComponentRole::Extension))
            .unwrap();
        registries
            .register_connector("forward", factory("forward", ComponentRole::Connector))
            .unwrap();

        assert!(registries.get(ComponentRole::Receiver).has("otlp"));
        assert!(registries.get(ComponentRole::Processor).has("batch"));
        assert!(registries.get(ComponentRole::Exporter).has("debug"));
        assert!(registries.get(ComponentRole::Extension).has("health_check"));
        assert!(registries.get(ComponentRole::Connector).has("forward"));
        assert!(!registries.get(ComponentRole::Receiver).has("batch"));
    }

    #[test]
    fn same_name_may_exist_under_different_roles() {
        let registries = RoleRegistries::new();

        registries
            .register_receiver("otlp", factory("otlp", ComponentRole::Receiver))
            .unwrap();
        let result = registries.register_exporter("otlp", factory("otlp", ComponentRole::Exporter));

        assert!(result.is_ok());
    }

    #[test]
    fn list_by_type_counts_per_role() {
        let registries = RoleRegistries::new();
        registries
            .register_receiver("otlp", factory("otlp", ComponentRole::Receiver))
            .unwrap();
        registries
            .register_receiver("kafka", factory("kafka", ComponentRole::Receiver))
            .unwrap();
        registries
            .register_processor("batch", factory("batch", ComponentRole::Processor))
            .unwrap();

        let receivers = registries.get(ComponentRole::Receiver);
        let processors = registries.get(ComponentRole::Processor);
        let exporters = registries.get(ComponentRole::Exporter);

        assert_eq!(receivers.list_by_type(ComponentRole::Receiver).len(), 2);
        assert_eq!(processors.list_by_type(ComponentRole::Processor).len(), 1);
        assert_eq!(exporters.list_by_type(ComponentRole::Exporter).len(), 0);
    }

    #[test]
    fn summary_sum_matches_counts() {
        let registries = RoleRegistries::new();
        registries
            .register_receiver("otlp", factory("otlp", ComponentRole::Receiver))
            .unwrap();
        registries
            .register_exporter("debug", factory("debug", ComponentRole::Exporter))
            .unwrap();
        registries
            .register_exporter("otlphttp", factory("otlphttp", ComponentRole::Exporter))
            .unwrap();

        let summary = registries.summary();
        let by_type: usize = ComponentRole::ALL
            .iter()
            .map(|role| registries.get(*role).count_by_type(*role))
            .sum();
        let counts: usize = ComponentRole::ALL
            .iter()
            .map(|role| registries.get(*role).count())
            .sum();

        assert_eq!(summary[&ComponentRole::Exporter], 2);
        assert_eq!(by_type, counts);
        assert_eq!(registries.total(), counts);
    }
}
