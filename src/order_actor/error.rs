use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::product_actor::ProductError;

/// Errors that can occur during order operations.
///
/// Display strings are shown to the operator as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("An order with ID {0} already exists.")]
    AlreadyExists(String),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("No orders registered.")]
    NoOrders,
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Order rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::AlreadyExists(id) => OrderError::AlreadyExists(id),
            FrameworkError::Rejected(reason) => OrderError::Rejected(reason),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::ActorCommunicationError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(code) => OrderError::InvalidProduct(code),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
