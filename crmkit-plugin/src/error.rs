//! Error types for the plugin pipeline.

use thiserror::Error;

/// Errors surfaced to the host from plugin execution.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("{operation} is missing required argument '{argument}'")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
    },

    #[error(
        "{plugin_name} has been registered incorrectly. Found -\nEntity: {entity}\nMessage: {message}\nStage: {stage}\nDepth: {depth}"
    )]
    RegistrationMismatch {
        plugin_name: String,
        entity: String,
        message: String,
        stage: i32,
        depth: u32,
    },

    #[error("unknown pipeline stage: {0}")]
    UnknownStage(i32),

    #[error("invalid record url: {0}")]
    InvalidRecordUrl(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Errors raised by the organization service boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("organization service fault: {0}")]
    Fault(String),
}
