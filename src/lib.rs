//! Component catalog for a telemetry collector distribution.
//!
//! Receivers, processors, exporters, extensions and connectors register a
//! factory under a unique name; pipeline-building code resolves names into
//! fresh component instances and validates their configuration before use.
//!
//! # Module Structure
//!
//! - [`component`]: Component trait, roles and descriptors
//! - [`registry`]: Thread-safe named-factory registries and the role summary
//! - [`context`]: Application context owning the registries
//! - [`builtin`]: Components bundled with the catalog
//! - [`config`]: YAML + environment configuration
//! - [`telemetry`]: Logging and self-tracing
//! - [`banner`]: Startup banner
//! - [`status`]: HTTP status routes

pub mod banner;
pub mod builtin;
pub mod component;
pub mod config;
pub mod context;
pub mod registry;
pub mod status;
pub mod telemetry;
