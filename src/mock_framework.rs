//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use [`expect_execute`] or [`expect_shutdown`] to assert behavior.

use crate::actor_framework::{Response, Store, StoreClient, StoreRequest};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// No actor runs behind the client: the test reads each request from
/// `receiver` and answers it itself, so success and odd replies can be
/// simulated deterministically.
pub fn create_mock_client<S: Store>(buffer_size: usize) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Execute request
pub async fn expect_execute<S: Store>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) -> Option<(S::Command, Response<S::Outcome>)> {
    match receiver.recv().await {
        Some(StoreRequest::Execute { command, respond_to }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown<S: Store>(receiver: &mut mpsc::Receiver<StoreRequest<S>>) -> bool {
    matches!(receiver.recv().await, Some(StoreRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Notice;
    use crate::order_store::{OrderCommand, OrderOutcome, OrderStore};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<OrderStore>(10);

        let task = tokio::spawn(async move {
            client.execute(OrderCommand::TrackOrder { id: 4 }).await
        });

        let (command, responder) = expect_execute(&mut receiver).await.expect("Expected Execute request");
        assert!(matches!(command, OrderCommand::TrackOrder { id: 4 }));
        responder.send(OrderOutcome::TrackOrder(Notice::order_tracking(4))).unwrap();

        match task.await.unwrap() {
            Ok(OrderOutcome::TrackOrder(notice)) => assert_eq!(notice, Notice::order_tracking(4)),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
