use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::{
    DEPLOYMENT_ENVIRONMENT_NAME, SERVICE_NAME, SERVICE_VERSION,
};

use crate::telemetry::config::TelemetryConfig;

/// Resource attributes describing this process
pub fn base_attributes(config: &TelemetryConfig) -> Vec<KeyValue> {
    let mut attrs = vec![
        KeyValue::new(SERVICE_NAME, config.service_name.clone()),
        KeyValue::new(SERVICE_VERSION, config.service_version.clone()),
    ];
    if let Some(environment) = &config.environment {
        attrs.push(KeyValue::new(DEPLOYMENT_ENVIRONMENT_NAME, environment.clone()));
    }
    attrs
}

pub fn build_resource(config: &TelemetryConfig) -> Resource {
    Resource::builder()
        .with_attributes(base_attributes(config))
        .build()
}
