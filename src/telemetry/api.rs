use opentelemetry_sdk::trace::SdkTracerProvider;

use crate::telemetry::config::TelemetryConfig;
use crate::telemetry::default::OtlpProvider;
use crate::telemetry::error::TelemetryError;
use crate::telemetry::trace::init_subscriber;

/// Trait for tracer provider backends
pub trait TelemetryProvider: Send + Sync {
    /// Build the tracer provider for this backend
    fn build_tracer_provider(
        &self,
        config: &TelemetryConfig,
    ) -> impl std::future::Future<Output = Result<SdkTracerProvider, TelemetryError>> + Send;
}

/// Keeps the tracer provider alive; call [`TelemetryGuard::shutdown`] before exit
/// to flush pending spans
#[derive(Debug)]
pub struct TelemetryGuard {
    provider: SdkTracerProvider,
}

impl TelemetryGuard {
    pub fn shutdown(self) -> Result<(), TelemetryError> {
        self.provider
            .shutdown()
            .map_err(|e| TelemetryError::Shutdown(e.to_string()))
    }

    /// Shut down, log a failed flush, and hand `outcome` back unchanged
    pub fn finish<T>(self, outcome: T) -> T {
        if let Err(e) = self.shutdown() {
            tracing::warn!(error = %e, "Telemetry shutdown failed");
        }
        outcome
    }
}

/// Initialize telemetry with a specific provider
pub async fn init_with_provider<P: TelemetryProvider>(
    provider: &P,
    config: &TelemetryConfig,
) -> Result<TelemetryGuard, TelemetryError> {
    let tracer_provider = provider.build_tracer_provider(config).await?;
    init_subscriber(tracer_provider.clone(), config)?;
    Ok(TelemetryGuard {
        provider: tracer_provider,
    })
}

/// Initialize telemetry with the OTLP provider
pub async fn init_with_config(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    init_with_provider(&OtlpProvider, config).await
}
