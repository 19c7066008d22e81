//! Logging and self-tracing for the catalog binary.
//!
//! Installs a `tracing` subscriber with an env filter, a pretty or JSON fmt
//! layer, and an OpenTelemetry layer that exports the process's own spans
//! over OTLP/gRPC when an endpoint is configured.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let config = TelemetryConfig::new("edge-collector", "1.0.0")
//!     .with_log_format(LogFormat::Json)
//!     .with_otlp_endpoint("http://localhost:4317");
//!
//! let guard = telemetry::init_with_config(&config).await?;
//! // ...
//! guard.shutdown()?;
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OTEL_SERVICE_NAME` | Service name | `CARGO_PKG_NAME` |
//! | `OTEL_SERVICE_VERSION` | Service version | `CARGO_PKG_VERSION` |
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | OTLP endpoint | - |
//! | `RUST_LOG` | Log level filter | `info` |
//! | `LOG_FORMAT` | `pretty` or `json`; anything else is rejected | `pretty` |
//! | `DEPLOYMENT_ENVIRONMENT` | `deployment.environment.name` | - |
//!
//! # Module Structure
//!
//! - [`api`]: Provider trait and initialization functions
//! - [`config`]: Configuration types
//! - [`error`]: Error types
//! - [`default`]: OTLP/no-op provider
//! - [`resource`]: Resource attributes
//! - [`trace`]: Subscriber layers

pub mod api;
pub mod config;
pub mod default;
pub mod error;
pub mod resource;
pub mod trace;

pub use api::{init_with_config, init_with_provider, TelemetryGuard, TelemetryProvider};
pub use config::{LogFormat, TelemetryConfig};
pub use error::TelemetryError;
