//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌─────────────────────┐
//!        │     Application     │
//!        │   (purge service)   │
//!        └──────────┬──────────┘
//!                   │ InventoryStore
//!                   ▼
//!        ┌─────────────────────┐
//!        │   Store Adapter     │
//!        │ (Diesel / memory)   │
//!        └─────────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::InventoryStore;
