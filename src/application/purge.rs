//! Delete one inventory row, then read back another.

use tracing::{debug, info, warn};

use crate::domain::{ProductId, PurgeReport};
use crate::error::Result;
use crate::port::outbound::store::InventoryStore;

/// Which rows a purge touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeRequest {
    pub delete_id: ProductId,
    pub verify_id: ProductId,
    /// Count the rows that would be deleted instead of deleting them.
    pub dry_run: bool,
}

impl Default for PurgeRequest {
    fn default() -> Self {
        Self {
            delete_id: ProductId::new(3),
            verify_id: ProductId::new(1),
            dry_run: false,
        }
    }
}

/// Runs the delete / commit / verify sequence against a store.
pub struct PurgeService<S> {
    store: S,
}

impl<S: InventoryStore> PurgeService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute the purge. Any store error aborts the run; nothing is retried.
    pub fn execute(&mut self, request: PurgeRequest) -> Result<PurgeReport> {
        let (rows_deleted, would_delete) = if request.dry_run {
            let matching = self.store.count_matching(request.delete_id)?;
            info!(id = %request.delete_id, matching, "Dry run, delete skipped");
            (0, Some(matching))
        } else {
            let deleted = self.store.delete_product(request.delete_id)?;
            if deleted == 0 {
                warn!(id = %request.delete_id, "No inventory row matched delete");
            } else {
                info!(id = %request.delete_id, rows = deleted, "Inventory row deleted");
            }
            (deleted, None)
        };

        let products = self.store.product_names(request.verify_id)?;
        debug!(id = %request.verify_id, rows = products.len(), "Verification rows fetched");

        Ok(PurgeReport {
            deleted_id: request.delete_id,
            rows_deleted,
            would_delete,
            verify_id: request.verify_id,
            products,
        })
    }

    /// Release the service and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
