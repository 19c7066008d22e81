//! Named-factory registry for pipeline components.
//!
//! Component authors register a zero-argument factory under a unique name;
//! pipeline builders later resolve the name and build fresh instances.
//!
//! # Quick Start
//!
//! ```rust
//! use collector_catalog::component::{Component, ComponentInfo, ComponentRole};
//! use collector_catalog::registry::RoleRegistries;
//! # use collector_catalog::component::{ComponentConfig, ValidationError};
//! # struct Otlp;
//! # impl Component for Otlp {
//! #     fn info(&self) -> ComponentInfo {
//! #         ComponentInfo::new("otlp", ComponentRole::Receiver, "1.0.0")
//! #     }
//! #     fn validate(&self, _: &ComponentConfig) -> Result<(), ValidationError> { Ok(()) }
//! # }
//!
//! let registries = RoleRegistries::new();
//! registries
//!     .register_receiver("otlp", || Box::new(Otlp) as Box<dyn Component>)
//!     .unwrap();
//!
//! let receiver = registries.get(ComponentRole::Receiver).create("otlp").unwrap();
//! assert_eq!(receiver.info().name, "otlp");
//! ```
//!
//! # Module Structure
//!
//! - [`store`]: The lock-guarded [`Registry`]
//! - [`roles`]: One registry per role and the [`Summary`] aggregate
//! - [`error`]: Error types

pub mod error;
pub mod roles;
pub mod store;

pub use error::RegistryError;
pub use roles::{RoleRegistries, Summary};
pub use store::{Factory, Registry};
