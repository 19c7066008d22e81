use serde::{Deserialize, Serialize};

use crate::telemetry::error::TelemetryError;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty human-readable format with colors (for local dev)
    #[default]
    Pretty,
    /// JSON structured format (for log shippers)
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Logging and self-tracing configuration (the `telemetry` config section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub service_version: String,
    /// OTLP/gRPC endpoint for the binary's own spans; no export when unset
    pub otlp_endpoint: Option<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Value for `deployment.environment.name`
    pub environment: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl TelemetryConfig {
    /// Create a new config with explicit values
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            otlp_endpoint: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            environment: None,
        }
    }

    /// Overlay `OTEL_*`, `RUST_LOG`, `LOG_FORMAT` and `DEPLOYMENT_ENVIRONMENT`.
    ///
    /// An unrecognized `LOG_FORMAT` is an error rather than a silent fallback.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), TelemetryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("OTEL_SERVICE_NAME") {
            self.service_name = name;
        }
        if let Some(version) = lookup("OTEL_SERVICE_VERSION") {
            self.service_version = version;
        }
        if let Some(endpoint) = lookup("OTEL_EXPORTER_OTLP_ENDPOINT") {
            self.otlp_endpoint = Some(endpoint);
        }
        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = LogFormat::parse(&format).ok_or_else(|| {
                TelemetryError::Config(format!(
                    "LOG_FORMAT must be 'pretty' or 'json', got '{format}'"
                ))
            })?;
        }
        if let Some(environment) = lookup("DEPLOYMENT_ENVIRONMENT") {
            self.environment = Some(environment);
        }
        Ok(())
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_default_is_pretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn log_format_parse_is_case_insensitive() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn config_new_sets_defaults() {
        let config = TelemetryConfig::new("test-service", "1.0.0");

        assert_eq!(config.service_name, "test-service");
        assert_eq!(config.service_version, "1.0.0");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.otlp_endpoint.is_none());
        assert!(config.environment.is_none());
    }

    #[test]
    fn default_uses_package_metadata() {
        let config = TelemetryConfig::default();

        assert_eq!(config.service_name, env!("CARGO_PKG_NAME"));
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn config_with_methods_chain() {
        let config = TelemetryConfig::new("svc", "1.0")
            .with_log_level("debug")
            .with_log_format(LogFormat::Json)
            .with_otlp_endpoint("http://localhost:4317")
            .with_environment("staging");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.otlp_endpoint, Some("http://localhost:4317".to_string()));
        assert_eq!(config.environment, Some("staging".to_string()));
    }

    #[test]
    fn apply_overrides_replaces_set_values_only() {
        let mut config = TelemetryConfig::new("svc", "1.0").with_log_level("warn");

        config
            .apply_overrides(|key| match key {
                "OTEL_SERVICE_NAME" => Some("override".to_string()),
                "LOG_FORMAT" => Some("json".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.service_name, "override");
        assert_eq!(config.service_version, "1.0");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut config = TelemetryConfig::new("svc", "1.0").with_log_format(LogFormat::Json);

        let err = config
            .apply_overrides(|key| (key == "LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();

        assert!(matches!(err, TelemetryError::Config(ref msg) if msg.contains("'xml'")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn deserializes_partial_section() {
        let config: TelemetryConfig =
            serde_yaml::from_str("log_level: debug\nenvironment: prod\n").unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.environment, Some("prod".to_string()));
        assert_eq!(config.service_name, env!("CARGO_PKG_NAME"));
    }
}
