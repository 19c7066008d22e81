//! Application configuration: YAML file merged with environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `COLLECTOR_CONFIG` | Path of the YAML config file | - |
//! | `PORT` | Status server port | `8080` |
//! | `BIND_ADDRESS` | Status server bind address | `0.0.0.0` |
//!
//! Telemetry variables (`OTEL_*`, `RUST_LOG`, `LOG_FORMAT`) are documented in
//! [`crate::telemetry`].

pub mod app;
pub mod error;

pub use app::{component_type, AppConfig, ComponentsConfig, ServerConfig, CONFIG_PATH_ENV};
pub use error::ConfigError;
