use crate::workflow::WorkflowStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to start process: {0}")]
    Launch(std::io::Error),

    #[error("Datastore error: {0}")]
    Datastore(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: WorkflowStatus,
        to: WorkflowStatus,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
