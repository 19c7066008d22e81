use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;

use crate::telemetry::api::TelemetryProvider;
use crate::telemetry::config::TelemetryConfig;
use crate::telemetry::error::TelemetryError;
use crate::telemetry::resource::build_resource;

/// OTLP/gRPC provider
/// - Exports the catalog's own spans when an endpoint is configured
/// - Falls back to no-op otherwise
pub struct OtlpProvider;

impl TelemetryProvider for OtlpProvider {
    async fn build_tracer_provider(
        &self,
        config: &TelemetryConfig,
    ) -> Result<SdkTracerProvider, TelemetryError> {
        let resource = build_resource(config);

        let Some(endpoint) = &config.otlp_endpoint else {
            return Ok(SdkTracerProvider::builder().with_resource(resource).build());
        };

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .map_err(|e: opentelemetry_otlp::ExporterBuildError| {
                TelemetryError::Exporter(e.to_string())
            })?;

        Ok(SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_without_endpoint_succeeds() {
        let config = TelemetryConfig::new("test-service", "1.0.0");

        let result = OtlpProvider.build_tracer_provider(&config).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn provider_with_otlp_endpoint_succeeds() {
        let config = TelemetryConfig::new("test-service", "1.0.0")
            .with_otlp_endpoint("http://localhost:4317");

        let result = OtlpProvider.build_tracer_provider(&config).await;

        assert!(result.is_ok());
    }
}
