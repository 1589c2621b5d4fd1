use thiserror::Error;

/// Errors surfaced by the order client.
///
/// Store operations themselves never fail; only the trip to the actor can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Unexpected outcome from order store: {0}")]
    UnexpectedOutcome(String),
}
