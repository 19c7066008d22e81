//! Process composition root.
//!
//! [`AppContext`] owns the configuration and the five role registries. It
//! is built once in `main` and shared by reference with anything that
//! registers or resolves components.

use thiserror::Error;

use crate::component::{ComponentInfo, ComponentRole, ValidationError};
use crate::config::{component_type, AppConfig, ComponentsConfig};
use crate::registry::{RoleRegistries, Summary};

/// Failure while resolving configured components against the registries
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unknown {role} type '{kind}' for component '{id}'")]
    Unknown {
        role: ComponentRole,
        id: String,
        kind: String,
    },

    #[error("invalid configuration for {role} '{id}': {source}")]
    Invalid {
        role: ComponentRole,
        id: String,
        #[source]
        source: ValidationError,
    },
}

/// A configured component that resolved and validated successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub id: String,
    pub info: ComponentInfo,
}

#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    registries: RoleRegistries,
}

impl AppContext {
    /// Context with empty registries
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registries: RoleRegistries::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registries(&self) -> &RoleRegistries {
        &self.registries
    }

    pub fn summary(&self) -> Summary {
        self.registries.summary()
    }

    /// Descriptors of every component registered under `role`, sorted by name
    pub fn describe(&self, role: ComponentRole) -> Vec<ComponentInfo> {
        let registry = self.registries.get(role);
        let mut names = registry.list();
        names.sort();
        names
            .iter()
            .filter_map(|name| registry.create(name).ok())
            .map(|component| component.info())
            .collect()
    }

    /// Resolve, build and validate every component in the configuration
    #[tracing::instrument(skip_all)]
    pub fn validate_components(&self) -> Result<Vec<ResolvedComponent>, PipelineError> {
        self.resolve(&self.config.components)
    }

    /// Resolve, build and validate every component in `components`.
    ///
    /// Stops at the first failure. Ids of the form `type/name` resolve
    /// through their `type` part.
    pub fn resolve(
        &self,
        components: &ComponentsConfig,
    ) -> Result<Vec<ResolvedComponent>, PipelineError> {
        let mut resolved = Vec::new();
        for role in ComponentRole::ALL {
            let registry = self.registries.get(role);
            for (id, config) in components.for_role(role) {
                let kind = component_type(id);
                let component = registry.create(kind).map_err(|e| PipelineError::Unknown {
                    role,
                    id: id.clone(),
                    kind: e.name().to_string(),
                })?;

                let config = config.clone().unwrap_or_default();
                component
                    .validate(&config)
                    .map_err(|source| PipelineError::Invalid {
                        role,
                        id: id.clone(),
                        source,
                    })?;

                tracing::debug!(%role, id = %id, "Component validated");
                resolved.push(ResolvedComponent {
                    id: id.clone(),
                    info: component.info(),
                });
            }
        }
        Ok(resolved)
    }
}
