use tracing::{error, info, warn, Instrument};
use vendor_ops::app_system::{setup_tracing, VendorSystem};
use vendor_ops::inventory_store::AddOutcome;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting vendor session");

    let system = VendorSystem::new();

    let span = tracing::info_span!("order_processing");
    async {
        let notice = system.order_client.accept_order(1).await.map_err(|e| e.to_string())?;
        info!(%notice, "Order 1 handled");
        let notice = system.order_client.reject_order(2).await.map_err(|e| e.to_string())?;
        info!(%notice, "Order 2 handled");
        let notice = system.order_client.track_order(1).await.map_err(|e| e.to_string())?;
        info!(%notice, "Order 1 tracked");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("inventory_update");
    let add_result = async {
        let inventory = &system.inventory_client;
        inventory.adjust_quantity(2, 1).await?;
        inventory.adjust_quantity(1, -100).await?;

        let catalog = inventory.catalog().await?;
        if let Some(carrot) = catalog.into_iter().find(|entry| entry.vegetable == "Carrot") {
            inventory.begin_add(carrot).await?;
            inventory.set_pending_quantity(4).await?;
            inventory.commit_add().await
        } else {
            warn!("Carrot missing from catalog, nothing added");
            Ok(AddOutcome::NothingPending)
        }
    }
    .instrument(span)
    .await;

    match add_result {
        Ok(outcome) => info!(?outcome, "Inventory add completed"),
        Err(e) => error!(error = %e, "Inventory update failed"),
    }

    let orders = system.order_client.snapshot().await.map_err(|e| e.to_string())?;
    let inventory = system.inventory_client.snapshot().await.map_err(|e| e.to_string())?;
    info!(
        orders = %serde_json::to_string(&orders).map_err(|e| e.to_string())?,
        inventory = %serde_json::to_string(&inventory).map_err(|e| e.to_string())?,
        "Session state"
    );

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Vendor session completed successfully");
    Ok(())
}
