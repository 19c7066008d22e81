//! Default telemetry provider.
//!
//! - If `OTEL_EXPORTER_OTLP_ENDPOINT` (or `telemetry.otlp_endpoint`) is set:
//!   spans are batched and exported to that endpoint over OTLP/gRPC
//! - Otherwise: no-op (spans are recorded but never exported)

mod provider;

pub use provider::OtlpProvider;
