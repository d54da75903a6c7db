//! # Order desk
//!
//! An interactive order-management desk built on a small actor framework.
//!
//! - **Foundation**
//!     - **Domain types** - plain entities with accessor contracts → [`domain::Product`], [`domain::Cart`], [`domain::Order`]
//!     - **Resource actors** - one task per collection, serving CRUD and custom actions → [`actor_framework::ResourceActor`]
//! - **Clients** - typed handles over the actors → [`clients::ProductClient`], [`clients::OrderClient`]
//! - **System** - startup, catalog seeding, shutdown → [`app_system::OrderSystem`]
//! - **Surface** - numbered menu over a [`menu::Console`] → [`menu::Menu`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use order_desk::app_system::{OrderSystem, SystemSettings};
//! use order_desk::clients::NewOrder;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = OrderSystem::start(&SystemSettings::default()).await?;
//!
//! let order = system.order_client.create_order(NewOrder {
//!     id: "ORD-1".into(),
//!     user: "alice".into(),
//!     delivery_address: "Main St 1".into(),
//!     selection: vec![1, 2],
//! }).await?;
//! assert_eq!(order.total(), 1225.0);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod menu;
pub mod order_actor;
pub mod product_actor;
pub mod report;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
