use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors raised while configuring, running or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),
    #[error("Shutdown request failed: {0}")]
    Shutdown(#[from] FrameworkError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
