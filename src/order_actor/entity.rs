use tracing::info;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderPatch};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    const KIND: &'static str = "order";

    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status Pending and no shipment date.
    fn from_create_params(params: OrderCreate) -> Result<Self, String> {
        if params.id.trim().is_empty() {
            return Err("order id must not be empty".to_string());
        }
        Ok(Order::new(params.id, params.cart, params.delivery_address))
    }

    fn on_create(&mut self) -> Result<(), String> {
        info!(order_id = %self.id, total = self.total(), items = self.cart().len(), "Order created");
        Ok(())
    }

    /// Overwrites status and/or delivery address. Any status may replace any other.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), String> {
        if let Some(status) = patch.status {
            info!(order_id = %self.id, from = %self.status(), to = %status, "Status changed");
            self.set_status(status);
        }
        if let Some(address) = patch.delivery_address {
            self.set_delivery_address(address);
        }
        Ok(())
    }

    fn on_delete(&self) -> Result<(), String> {
        info!(order_id = %self.id, status = %self.status(), "Order deleted");
        Ok(())
    }

    /// Handles order-specific actions.
    ///
    /// # Actions
    /// - `Confirm`: Confirmed + shipment date, from any status
    /// - `Cancel`: Cancelled, from any status
    /// - `AddProduct` / `RemoveProduct`: cart edits, total recomputed
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::Confirm => {
                let shipped = self.confirm();
                info!(order_id = %self.id, "Order confirmed");
                Ok(OrderActionResult::Confirm(shipped))
            }
            OrderAction::Cancel => {
                self.cancel();
                info!(order_id = %self.id, "Order cancelled");
                Ok(OrderActionResult::Cancel(()))
            }
            OrderAction::AddProduct(product) => {
                let cart = self.cart_mut();
                cart.add_product(product);
                Ok(OrderActionResult::AddProduct(cart.total()))
            }
            OrderAction::RemoveProduct(code) => {
                let cart = self.cart_mut();
                let removed = cart.remove_product(&code);
                Ok(OrderActionResult::RemoveProduct { removed, total: cart.total() })
            }
        }
    }
}
