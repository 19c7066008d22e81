use thiserror::Error;

/// Errors returned by [`Registry`](crate::registry::Registry) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("component '{name}' is already registered")]
    AlreadyRegistered { name: String },

    #[error("component '{name}' not found")]
    NotFound { name: String },
}

impl RegistryError {
    /// Name of the entry the failed operation targeted
    pub fn name(&self) -> &str {
        match self {
            Self::AlreadyRegistered { name } | Self::NotFound { name } => name,
        }
    }
}
