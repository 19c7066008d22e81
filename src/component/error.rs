use thiserror::Error;

/// Reason a component rejected its configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// Returned when a string does not name a component role
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component role: {0}")]
pub struct ParseRoleError(pub String);
