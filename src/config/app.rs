use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::component::{ComponentConfig, ComponentRole};
use crate::config::error::ConfigError;
use crate::telemetry::TelemetryConfig;

/// Environment variable holding the path of the YAML config file
pub const CONFIG_PATH_ENV: &str = "COLLECTOR_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub components: ComponentsConfig,
}

/// Status server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Configured components grouped by role.
///
/// Keys are component ids of the form `type` or `type/name`; the type part
/// selects the registry entry. A bare key (`debug:`) yields an empty config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub receivers: BTreeMap<String, Option<ComponentConfig>>,
    pub processors: BTreeMap<String, Option<ComponentConfig>>,
    pub exporters: BTreeMap<String, Option<ComponentConfig>>,
    pub extensions: BTreeMap<String, Option<ComponentConfig>>,
    pub connectors: BTreeMap<String, Option<ComponentConfig>>,
}

impl ComponentsConfig {
    pub fn for_role(&self, role: ComponentRole) -> &BTreeMap<String, Option<ComponentConfig>> {
        match role {
            ComponentRole::Receiver => &self.receivers,
            ComponentRole::Processor => &self.processors,
            ComponentRole::Exporter => &self.exporters,
            ComponentRole::Extension => &self.extensions,
            ComponentRole::Connector => &self.connectors,
        }
    }

    pub fn is_empty(&self) -> bool {
        ComponentRole::ALL
            .iter()
            .all(|role| self.for_role(*role).is_empty())
    }
}

/// Registry key for a component id (`otlp/grpc` -> `otlp`)
pub fn component_type(id: &str) -> &str {
    id.split_once('/').map_or(id, |(kind, _)| kind)
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load the file named by `COLLECTOR_CONFIG` (defaults if unset), then
    /// apply environment overrides and validate
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable lookup
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment variables on top of file values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("PORT must be a number, got '{port}'")))?;
        }
        if let Some(bind) = lookup("BIND_ADDRESS") {
            self.server.bind = bind;
        }
        self.telemetry.apply_overrides(lookup)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero".to_string()));
        }
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::Validation("server.bind must not be empty".to_string()));
        }
        for role in ComponentRole::ALL {
            for id in self.components.for_role(role).keys() {
                if component_type(id).trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{role} id '{id}' has an empty component type"
                    )));
                }
            }
        }
        Ok(())
    }
}
