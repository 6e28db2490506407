//! Configuration sub-modules.

pub mod database;
pub mod inventory;
pub mod logging;
pub mod settings;

pub use database::{Backend, DatabaseConfig};
pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;
pub use settings::Config;
