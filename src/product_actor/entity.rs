use tracing::debug;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    const KIND: &'static str = "product";

    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String { &self.code }

    /// Creates a new Product from creation parameters.
    ///
    /// Price and stock are taken as given, negative values included.
    fn from_create_params(params: ProductCreate) -> Result<Self, String> {
        Ok(Product::from(params))
    }

    /// Updates any subset of name, price, stock and category.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.set_name(name);
        }
        if let Some(price) = patch.price {
            self.set_price(price);
        }
        if let Some(stock) = patch.stock {
            self.set_stock(stock);
        }
        if let Some(category) = patch.category {
            self.set_category(category);
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `AdjustStock(delta)`: Applies the delta and returns the new level
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock())),
            ProductAction::AdjustStock(delta) => {
                let level = self.adjust_stock(delta);
                debug!(code = %self.code(), delta, level, "Stock adjusted");
                Ok(ProductActionResult::AdjustStock(level))
            }
        }
    }
}
