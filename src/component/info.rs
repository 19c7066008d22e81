use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::role::ComponentRole;

/// Maturity level advertised by a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Beta,
    Alpha,
    #[default]
    Development,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata a component reports about itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub role: ComponentRole,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stability: Stability,
}

impl ComponentInfo {
    /// Create a descriptor with an empty description and `development` stability
    pub fn new(name: impl Into<String>, role: ComponentRole, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            version: version.into(),
            description: String::new(),
            stability: Stability::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_defaults() {
        let info = ComponentInfo::new("otlp", ComponentRole::Receiver, "1.0.0");

        assert_eq!(info.name, "otlp");
        assert_eq!(info.role, ComponentRole::Receiver);
        assert_eq!(info.version, "1.0.0");
        assert!(info.description.is_empty());
        assert_eq!(info.stability, Stability::Development);
    }

    #[test]
    fn with_methods_chain() {
        let info = ComponentInfo::new("batch", ComponentRole::Processor, "0.3.0")
            .with_description("batches telemetry")
            .with_stability(Stability::Beta);

        assert_eq!(info.description, "batches telemetry");
        assert_eq!(info.stability, Stability::Beta);
    }

    #[test]
    fn serializes_role_as_type_field() {
        let info = ComponentInfo::new("debug", ComponentRole::Exporter, "1.0.0")
            .with_stability(Stability::Alpha);

        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["type"], "exporter");
        assert_eq!(value["stability"], "alpha");
    }
}
