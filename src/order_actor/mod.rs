//! Order-specific domain logic: lifecycle actions and cart edits.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
