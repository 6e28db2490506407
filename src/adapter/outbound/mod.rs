//! Outbound adapters implementing the store port.

pub mod database;
pub mod memory;
