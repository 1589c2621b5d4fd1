use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// State container that can be owned by a [`StoreActor`].
///
/// A store is plain synchronous state: every command runs to completion and
/// produces an outcome. The actor guarantees commands are applied one at a time.
pub trait Store: Send + 'static {
    type Command: Send + Debug;
    type Outcome: Send + Debug;

    /// Name used in tracing spans.
    const NAME: &'static str;

    /// Apply a command to the store and report what happened.
    fn apply(&mut self, command: Self::Command) -> Self::Outcome;
}

/// Transport failures between a client and its actor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StoreRequest<S: Store> {
    Execute {
        command: S::Command,
        respond_to: Response<S::Outcome>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct StoreActor<S: Store> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    store: S,
}

impl<S: Store> StoreActor<S> {
    pub fn new(buffer_size: usize, store: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    /// Returns the store so callers can inspect the final state.
    #[instrument(name = "store_actor", skip(self), fields(store = S::NAME))]
    pub async fn run(mut self) -> S {
        info!("Store actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Execute { command, respond_to } => {
                    debug!(?command, "Applying command");
                    let outcome = self.store.apply(command);
                    let _ = respond_to.send(outcome);
                }
                StoreRequest::Shutdown => {
                    info!("Store actor shutting down");
                    break;
                }
            }
        }
        info!("Store actor stopped");
        self.store
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct StoreClient<S: Store> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: Store> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Store> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn execute(&self, command: S::Command) -> Result<S::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Execute { command, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Tally {
        total: i64,
    }

    #[derive(Debug)]
    enum TallyCommand {
        Add(i64),
        Read,
    }

    impl Store for Tally {
        type Command = TallyCommand;
        type Outcome = i64;

        const NAME: &'static str = "tally";

        fn apply(&mut self, command: TallyCommand) -> i64 {
            match command {
                TallyCommand::Add(n) => {
                    self.total += n;
                    self.total
                }
                TallyCommand::Read => self.total,
            }
        }
    }

    #[tokio::test]
    async fn test_store_actor_applies_commands_in_order() {
        let (actor, client) = StoreActor::new(10, Tally::default());
        let handle = tokio::spawn(actor.run());

        assert_eq!(client.execute(TallyCommand::Add(2)).await, Ok(2));
        assert_eq!(client.execute(TallyCommand::Add(-5)).await, Ok(-3));
        assert_eq!(client.execute(TallyCommand::Read).await, Ok(-3));

        client.shutdown().await.unwrap();
        let store = handle.await.unwrap();
        assert_eq!(store.total, -3);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = StoreActor::new(10, Tally::default());
        drop(actor);

        assert_eq!(client.execute(TallyCommand::Read).await, Err(FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = StoreActor::new(10, Tally::default());
        let handle = tokio::spawn(actor.run());

        client.execute(TallyCommand::Add(7)).await.unwrap();
        drop(client);

        let store = handle.await.unwrap();
        assert_eq!(store.total, 7);
    }
}
