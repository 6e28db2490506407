//! Adapters connecting ports to the outside world.
//!
//! - [`inbound`] - command-line entry points
//! - [`outbound`] - inventory store implementations

pub mod inbound;
pub mod outbound;
