//! Inventory domain types, independent of any database backend.

pub mod id;
pub mod product;
pub mod report;

pub use id::ProductId;
pub use product::ProductName;
pub use report::PurgeReport;
