use thiserror::Error;

/// Errors surfaced by the inventory client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Unexpected outcome from inventory store: {0}")]
    UnexpectedOutcome(String),
}
