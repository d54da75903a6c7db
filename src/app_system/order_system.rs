use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, Product};
use super::{AppError, SystemSettings};

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, seeding the catalog, wiring clients
/// together, and handling shutdown. All session state lives here and is
/// discarded when the system shuts down.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the product actor, seeds it, then starts the order actor.
    #[instrument(name = "order_system", skip(settings), fields(catalog_size = settings.catalog.len()))]
    pub async fn start(settings: &SystemSettings) -> Result<Self, AppError> {
        info!("Starting order system");

        // 1. Product catalog
        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(settings.mailbox_size);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        for product in settings.catalog.iter().cloned() {
            product_client.create_product(product).await?;
        }

        // 2. Orders, with access to the catalog
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(settings.mailbox_size);
        let order_client = OrderClient::new(order_resource_client, product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!("Order system started");

        Ok(Self {
            order_client,
            product_client,
            handles: vec![product_handle, order_handle],
        })
    }

    /// Drops this system's clients and waits for every actor to drain.
    ///
    /// Actors stop once all clients are gone, so any clones handed out
    /// (e.g. to a `Menu`) must be dropped first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down order system");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(AppError::Shutdown(e.to_string()));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
