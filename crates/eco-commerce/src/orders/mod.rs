//! Orders module.
//!
//! Orders are owned by an external storage; this crate only reads them.

mod order;
mod store;

pub use order::{Order, OrderLine};
pub use store::{InMemoryOrders, OrderStore};
