/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds a signed delta to the stock.
    ///
    /// # Arguments
    /// * `i64` - Positive to replenish, negative to consume
    ///
    /// Never fails: stock is allowed to go below zero.
    AdjustStock(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - returns the current stock level
    CheckStock(i64),
    /// Result from AdjustStock action - returns the stock level after the change
    AdjustStock(i64),
}
