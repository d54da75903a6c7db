use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor (the catalog).
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, product), fields(code = %product.code))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, code: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(code, patch).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, code: String) -> Result<i64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(code, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Applies a signed stock delta and returns the new level.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, code: String, delta: i64) -> Result<i64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(code, ProductAction::AdjustStock(delta)).await? {
            ProductActionResult::AdjustStock(level) => Ok(level),
            other => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
