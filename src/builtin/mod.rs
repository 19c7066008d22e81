//! Components bundled with the catalog.
//!
//! These are catalog entries only: they describe themselves and validate
//! their configuration, while the data path belongs to the collector
//! framework.

pub mod fields;

use crate::component::{
    Component, ComponentConfig, ComponentInfo, ComponentRole, Stability, ValidationError,
};
use crate::registry::{RegistryError, RoleRegistries};

use fields::{validate_fields, Field, FieldKind};

/// Static description of a bundled component
#[derive(Debug, Clone, Copy)]
pub struct BuiltinSpec {
    pub name: &'static str,
    pub role: ComponentRole,
    pub stability: Stability,
    pub description: &'static str,
    pub fields: &'static [Field],
}

/// Every bundled component
pub const BUILTINS: &[BuiltinSpec] = &[
    BuiltinSpec {
        name: "otlp",
        role: ComponentRole::Receiver,
        stability: Stability::Stable,
        description: "Receives traces, metrics and logs over OTLP gRPC and HTTP",
        fields: &[
            Field::optional("endpoint", FieldKind::String),
            Field::optional("transport", FieldKind::OneOf(&["grpc", "http"])),
            Field::optional("max_recv_msg_size_mib", FieldKind::PositiveInt),
            Field::optional("include_metadata", FieldKind::Bool),
        ],
    },
    BuiltinSpec {
        name: "batch",
        role: ComponentRole::Processor,
        stability: Stability::Stable,
        description: "Groups telemetry into batches before export",
        fields: &[
            Field::optional("send_batch_size", FieldKind::PositiveInt),
            Field::optional("send_batch_max_size", FieldKind::PositiveInt),
            Field::optional("timeout", FieldKind::String),
        ],
    },
    BuiltinSpec {
        name: "memory_limiter",
        role: ComponentRole::Processor,
        stability: Stability::Beta,
        description: "Refuses data when process memory crosses a limit",
        fields: &[
            Field::required("limit_mib", FieldKind::PositiveInt),
            Field::optional("spike_limit_mib", FieldKind::PositiveInt),
            Field::optional("check_interval", FieldKind::String),
        ],
    },
    BuiltinSpec {
        name: "debug",
        role: ComponentRole::Exporter,
        stability: Stability::Development,
        description: "Writes telemetry to the console",
        fields: &[Field::optional(
            "verbosity",
            FieldKind::OneOf(&["basic", "normal", "detailed"]),
        )],
    },
    BuiltinSpec {
        name: "otlphttp",
        role: ComponentRole::Exporter,
        stability: Stability::Beta,
        description: "Sends telemetry to an OTLP/HTTP endpoint",
        fields: &[
            Field::required("endpoint", FieldKind::String),
            Field::optional("compression", FieldKind::OneOf(&["none", "gzip", "zstd"])),
            Field::optional("timeout", FieldKind::String),
        ],
    },
    BuiltinSpec {
        name: "health_check",
        role: ComponentRole::Extension,
        stability: Stability::Beta,
        description: "Serves an HTTP liveness endpoint",
        fields: &[
            Field::optional("endpoint", FieldKind::String),
            Field::optional("path", FieldKind::String),
        ],
    },
    BuiltinSpec {
        name: "forward",
        role: ComponentRole::Connector,
        stability: Stability::Alpha,
        description: "Passes data from one pipeline to another of the same signal",
        fields: &[],
    },
];

/// Component instance built from a [`BuiltinSpec`]
#[derive(Debug, Clone)]
pub struct BuiltinComponent {
    spec: BuiltinSpec,
}

impl BuiltinComponent {
    pub fn new(spec: BuiltinSpec) -> Self {
        Self { spec }
    }
}

impl Component for BuiltinComponent {
    fn info(&self) -> ComponentInfo {
        ComponentInfo::new(self.spec.name, self.spec.role, env!("CARGO_PKG_VERSION"))
            .with_description(self.spec.description)
            .with_stability(self.spec.stability)
    }

    fn validate(&self, config: &ComponentConfig) -> Result<(), ValidationError> {
        validate_fields(self.spec.fields, config)
    }
}

/// Register every bundled component under its role; returns how many were added
pub fn register_all(registries: &RoleRegistries) -> Result<usize, RegistryError> {
    for spec in BUILTINS {
        let spec = *spec;
        registries.get(spec.role).register(spec.name, move || {
            Box::new(BuiltinComponent::new(spec)) as Box<dyn Component>
        })?;
        tracing::debug!(component = spec.name, role = %spec.role, "Registered builtin component");
    }
    Ok(BUILTINS.len())
}
