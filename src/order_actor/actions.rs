use chrono::{DateTime, Local};

use crate::domain::Product;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Sets status to Confirmed and stamps the shipment date.
    Confirm,
    /// Sets status to Cancelled.
    Cancel,
    /// Appends a product to the order's cart.
    AddProduct(Product),
    /// Removes the first cart product with the given code.
    RemoveProduct(String),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Shipment date assigned by the confirmation
    Confirm(DateTime<Local>),
    Cancel(()),
    /// Cart total after the addition
    AddProduct(f64),
    /// Whether a product was removed, and the cart total afterwards
    RemoveProduct { removed: bool, total: f64 },
}
