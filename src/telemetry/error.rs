use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Exporter error: {0}")]
    Exporter(String),

    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Shutdown error: {0}")]
    Shutdown(String),
}
