//! Galpao - inventory row maintenance for the `estoques` table.
//!
//! Deletes one inventory row, commits, then reads back another row and
//! prints its product name. Runs against MySQL in production and SQLite for
//! local files and test fixtures.
//!
//! # Modules
//!
//! - [`domain`] - Identifier and result types
//! - [`port`] - The [`port::InventoryStore`] trait
//! - [`application`] - The purge service (delete / commit / verify)
//! - [`adapter`] - Diesel and in-memory stores, CLI handlers
//! - [`infrastructure`] - Configuration loading and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use galpao::adapter::outbound::database::{DatabaseTarget, DieselInventoryStore};
//! use galpao::application::{PurgeRequest, PurgeService};
//!
//! fn main() -> galpao::error::Result<()> {
//!     let target = DatabaseTarget::from_url("mysql://root@localhost:3306/galpao")?;
//!     let store = DieselInventoryStore::connect(&target)?;
//!     let report = PurgeService::new(store).execute(PurgeRequest::default())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
