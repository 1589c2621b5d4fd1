#[cfg(test)]
mod tests {
    use crate::app_system::{SeedData, SystemConfig, VendorSystem};
    use crate::clients::{InventoryClient, OrderClient};
    use crate::domain::{InventoryItem, Notice, Order, OrderStatus, VegetableCatalogEntry};
    use crate::inventory_store::{
        AddFlowPhase, AddOutcome, InventoryCommand, InventoryError, InventoryOutcome, InventoryStore,
    };
    use crate::mock_framework::{create_mock_client, expect_execute, expect_shutdown};
    use crate::order_store::{OrderCommand, OrderError, OrderOutcome, OrderStore};

    #[tokio::test]
    async fn test_order_client_sends_accept_command() {
        let (inner, mut order_rx) = create_mock_client::<OrderStore>(10);
        let order_client = OrderClient::new(inner);

        let task = tokio::spawn(async move { order_client.accept_order(3).await });

        let (command, responder) = expect_execute(&mut order_rx).await.expect("Expected Order Execute");
        match command {
            OrderCommand::AcceptOrder { id } => assert_eq!(id, 3),
            other => panic!("Unexpected command: {:?}", other),
        }
        responder.send(OrderOutcome::AcceptOrder(Notice::order_accepted())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Notice::order_accepted()));
    }

    #[tokio::test]
    async fn test_order_client_rejects_mismatched_outcome() {
        let (inner, mut order_rx) = create_mock_client::<OrderStore>(10);
        let order_client = OrderClient::new(inner);

        let task = tokio::spawn(async move { order_client.reject_order(1).await });

        let (_, responder) = expect_execute(&mut order_rx).await.expect("Expected Order Execute");
        responder.send(OrderOutcome::ListOrders(Vec::new())).unwrap();

        assert!(matches!(task.await.unwrap(), Err(OrderError::UnexpectedOutcome(_))));
    }

    #[tokio::test]
    async fn test_inventory_client_reports_dropped_actor() {
        let (inner, mut inventory_rx) = create_mock_client::<InventoryStore>(10);
        let inventory_client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { inventory_client.commit_add().await });

        let (command, responder) = expect_execute(&mut inventory_rx).await.expect("Expected Inventory Execute");
        assert!(matches!(command, InventoryCommand::CommitAdd));
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(InventoryError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_inventory_client_forwards_adjust() {
        let (inner, mut inventory_rx) = create_mock_client::<InventoryStore>(10);
        let inventory_client = InventoryClient::new(inner);

        let task = tokio::spawn(async move {
            let quantity = inventory_client.adjust_quantity(2, -4).await;
            let stopped = inventory_client.shutdown().await;
            (quantity, stopped)
        });

        let (command, responder) = expect_execute(&mut inventory_rx).await.expect("Expected Inventory Execute");
        match command {
            InventoryCommand::AdjustQuantity { id, delta } => {
                assert_eq!(id, 2);
                assert_eq!(delta, -4);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
        responder.send(InventoryOutcome::AdjustQuantity(Some(6))).unwrap();
        assert!(expect_shutdown(&mut inventory_rx).await);

        let (quantity, stopped) = task.await.unwrap();
        assert_eq!(quantity, Ok(Some(6)));
        assert_eq!(stopped, Ok(()));
    }

    #[tokio::test]
    async fn test_order_lifecycle_through_system() {
        let system = VendorSystem::new();

        let notice = system.order_client.accept_order(1).await.unwrap();
        assert_eq!(notice.message, "Order has been accepted!");
        system.order_client.reject_order(2).await.unwrap();
        let tracking = system.order_client.track_order(1).await.unwrap();
        assert_eq!(tracking.message, "You are tracking order #1");

        let snapshot = system.order_client.snapshot().await.unwrap();
        let ids: Vec<u32> = snapshot.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(snapshot.orders[0].status, OrderStatus::Accepted);
        assert_eq!(snapshot.accepted_history.len(), 1);
        assert_eq!(snapshot.accepted_history[0].customer_name, "Vivek Kushwaha");

        let (orders, _) = system.shutdown().await.unwrap();
        assert_eq!(orders.accepted_history().len(), 1);
    }

    #[tokio::test]
    async fn test_rejecting_only_order_empties_list() {
        let seed = SeedData {
            orders: vec![Order::new(2, "Anant Bahore", "Potato", 3)],
            inventory: Vec::new(),
        };
        let system = VendorSystem::with_config(SystemConfig::with_seed(seed));

        system.order_client.reject_order(2).await.unwrap();

        assert!(system.order_client.list_orders().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_flow_merges_through_system() {
        let seed = SeedData {
            orders: Vec::new(),
            inventory: vec![InventoryItem::new(1, "Cabbage", 5)],
        };
        let system = VendorSystem::with_config(SystemConfig::with_seed(seed));
        let inventory = &system.inventory_client;

        let pending = inventory.begin_add(VegetableCatalogEntry::new(1, "Cabbage", 10)).await.unwrap();
        assert_eq!(pending.phase(), AddFlowPhase::Configuring);
        inventory.set_pending_quantity(3).await.unwrap();
        let outcome = inventory.commit_add().await.unwrap();

        assert_eq!(outcome, AddOutcome::Merged { id: 1, quantity: 8 });
        assert_eq!(inventory.list_inventory().await.unwrap(), vec![InventoryItem::new(1, "Cabbage", 8)]);
        assert_eq!(inventory.commit_add().await.unwrap(), AddOutcome::NothingPending);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_inventory_operations_through_system() {
        let system = VendorSystem::new();
        let inventory = &system.inventory_client;

        assert_eq!(inventory.adjust_quantity(1, -100).await.unwrap(), Some(1));
        assert!(inventory.remove_item(3).await.unwrap());
        assert_eq!(inventory.adjust_quantity(3, 1).await.unwrap(), None);

        let catalog = inventory.catalog().await.unwrap();
        let peas = catalog.into_iter().find(|e| e.vegetable == "Peas").unwrap();
        inventory.begin_add(peas).await.unwrap();
        inventory.step_pending_quantity(4).await.unwrap();
        inventory.back_to_selecting().await.unwrap();
        assert_eq!(inventory.pending_addition().await.unwrap().phase(), AddFlowPhase::Idle);

        let spinach = VegetableCatalogEntry::new(6, "Spinach", 8);
        inventory.begin_add(spinach).await.unwrap();
        inventory.cancel_add().await.unwrap();

        let snapshot = inventory.snapshot().await.unwrap();
        assert_eq!(
            snapshot.items,
            vec![InventoryItem::new(1, "Cabbage", 1), InventoryItem::new(2, "Potato", 10)]
        );
        assert_eq!(snapshot.pending.quantity(), 1);
        assert!(snapshot.pending.selection().is_none());

        system.shutdown().await.unwrap();
    }
}
