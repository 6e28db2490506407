//! Application services orchestrating domain logic over ports.

pub mod purge;

pub use purge::{PurgeRequest, PurgeService};
