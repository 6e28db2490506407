//! Diesel-backed inventory persistence.
//!
//! Production runs against MySQL; local files and test fixtures use SQLite
//! through the same query code.

pub mod connection;
pub mod schema;
pub mod store;

pub use connection::{establish, DatabaseTarget, InventoryConnection};
pub use store::DieselInventoryStore;
