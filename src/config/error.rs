use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("telemetry settings rejected: {0}")]
    Telemetry(#[from] TelemetryError),
}
