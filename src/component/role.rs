use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component::error::ParseRoleError;

/// Pipeline role a component plays (maps to the collector's component kinds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    /// Intake: accepts telemetry into the pipeline
    Receiver,
    Processor,
    /// Output: ships telemetry out of the pipeline
    Exporter,
    Extension,
    Connector,
}

impl ComponentRole {
    /// All roles, in pipeline order
    pub const ALL: [ComponentRole; 5] = [
        Self::Receiver,
        Self::Processor,
        Self::Exporter,
        Self::Extension,
        Self::Connector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receiver => "receiver",
            Self::Processor => "processor",
            Self::Exporter => "exporter",
            Self::Extension => "extension",
            Self::Connector => "connector",
        }
    }
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "receiver" | "receivers" | "intake" => Ok(Self::Receiver),
            "processor" | "processors" => Ok(Self::Processor),
            "exporter" | "exporters" | "output" => Ok(Self::Exporter),
            "extension" | "extensions" => Ok(Self::Extension),
            "connector" | "connectors" => Ok(Self::Connector),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
