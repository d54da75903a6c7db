//! Typed handles over the resource actors.

#[macro_use]
mod macros;
pub mod product_client;
pub mod order_client;

pub use product_client::*;
pub use order_client::*;
