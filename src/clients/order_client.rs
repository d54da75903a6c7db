use chrono::{DateTime, Local};
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::ProductClient;
use crate::domain::{Cart, Order, OrderCreate, OrderPatch, OrderStatus, Product};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::report::OrderReport;

/// Everything needed to place an order.
///
/// `selection` holds 1-based catalog positions; positions outside the catalog
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub id: String,
    pub user: String,
    pub delivery_address: String,
    pub selection: Vec<usize>,
}

/// Client for interacting with the Order actor.
///
/// This client handles the orchestration: input validation, catalog lookups
/// through the [`ProductClient`], and the aggregate report.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order);
impl_client_delete!(OrderClient, Order, OrderError, order);

/// Trims `value` and rejects it when nothing is left.
pub fn require_field(value: &str, field: &'static str) -> Result<String, OrderError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(OrderError::MissingField(field));
    }
    Ok(value.to_string())
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    #[instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn create_order(&self, request: NewOrder) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate inputs
        let id = require_field(&request.id, "Order ID")?;
        if self.order_exists(id.clone()).await? {
            warn!("Duplicate order id");
            return Err(OrderError::AlreadyExists(id));
        }
        let user = require_field(&request.user, "User name")?;
        let address = require_field(&request.delivery_address, "Delivery address")?;

        // Step 2: Build the cart from catalog positions
        let catalog = self.catalog().await?;
        let mut cart = Cart::new(user);
        for position in request.selection {
            match position.checked_sub(1).and_then(|index| catalog.get(index)) {
                Some(product) => cart.add_product(product.clone()),
                None => debug!(position, catalog_size = catalog.len(), "Ignoring selection outside catalog"),
            }
        }

        // Step 3: Store the order
        let params = OrderCreate {
            id: id.clone(),
            cart,
            delivery_address: address,
        };
        self.inner.create(params).await?;

        self.get_order(id.clone())
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Products available for selection, in catalog order.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<Vec<Product>, OrderError> {
        Ok(self.product_client.list_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn order_exists(&self, id: String) -> Result<bool, OrderError> {
        Ok(self.inner.get(id).await?.is_some())
    }

    /// Fails with [`OrderError::NoOrders`] when the collection is empty.
    #[instrument(skip(self))]
    pub async fn ensure_orders(&self) -> Result<(), OrderError> {
        if self.inner.list().await?.is_empty() {
            return Err(OrderError::NoOrders);
        }
        Ok(())
    }

    /// Linear lookup by id; absent ids are an error rather than `None`.
    #[instrument(skip(self))]
    pub async fn find_order(&self, id: String) -> Result<Order, OrderError> {
        self.inner
            .get(id.clone())
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Replaces the status with any label. Known labels map to their state.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: String, status: String) -> Result<Order, OrderError> {
        let status = OrderStatus::from(require_field(&status, "Status")?);
        let patch = OrderPatch { status: Some(status), ..Default::default() };
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_address(&self, id: String, address: String) -> Result<Order, OrderError> {
        let address = require_field(&address, "Delivery address")?;
        let patch = OrderPatch { delivery_address: Some(address), ..Default::default() };
        Ok(self.inner.update(id, patch).await?)
    }

    /// Confirms from any status and returns the assigned shipment date.
    #[instrument(skip(self))]
    pub async fn confirm_order(&self, id: String) -> Result<DateTime<Local>, OrderError> {
        match self.inner.perform_action(id, OrderAction::Confirm).await? {
            OrderActionResult::Confirm(shipped) => Ok(shipped),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<(), OrderError> {
        match self.inner.perform_action(id, OrderAction::Cancel).await? {
            OrderActionResult::Cancel(()) => Ok(()),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Adds a catalog product to an existing order and returns the new cart total.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: String, product_code: String) -> Result<f64, OrderError> {
        let product = self
            .product_client
            .get_product(product_code.clone())
            .await?
            .ok_or(OrderError::InvalidProduct(product_code))?;

        match self.inner.perform_action(id, OrderAction::AddProduct(product)).await? {
            OrderActionResult::AddProduct(total) => Ok(total),
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Removes the first matching product from an order's cart.
    /// Returns `false` when the cart held no such product.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: String, product_code: String) -> Result<bool, OrderError> {
        match self.inner.perform_action(id, OrderAction::RemoveProduct(product_code)).await? {
            OrderActionResult::RemoveProduct { removed, total } => {
                debug!(removed, total, "Cart updated");
                Ok(removed)
            }
            other => Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn report(&self) -> Result<OrderReport, OrderError> {
        let orders = self.inner.list().await?;
        OrderReport::from_orders(&orders).ok_or(OrderError::NoOrders)
    }
}
