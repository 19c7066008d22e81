//! Component contract shared by every pluggable pipeline unit.
//!
//! A component is anything that can describe itself with a
//! [`ComponentInfo`] and check a configuration mapping before it is wired
//! into a pipeline. The concrete types live with their authors; the
//! registry only ever sees `Box<dyn Component>`.
//!
//! # Module Structure
//!
//! - [`role`]: The closed set of pipeline roles
//! - [`info`]: Descriptor and stability levels
//! - [`error`]: Validation and parse errors

pub mod error;
pub mod info;
pub mod role;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ParseRoleError, ValidationError};
pub use info::{ComponentInfo, Stability};
pub use role::ComponentRole;

/// Configuration mapping handed to [`Component::validate`]
pub type ComponentConfig = serde_json::Map<String, serde_json::Value>;

/// Capability contract for receivers, processors, exporters, extensions and connectors
pub trait Component: Send + Sync {
    /// Describe this component
    fn info(&self) -> ComponentInfo;

    /// Check a configuration mapping for this component
    fn validate(&self, config: &ComponentConfig) -> Result<(), ValidationError>;
}
