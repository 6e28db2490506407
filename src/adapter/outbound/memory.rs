//! In-memory inventory store for tests and dry experiments.

use crate::domain::{ProductId, ProductName};
use crate::error::{Error, Result};
use crate::port::outbound::store::InventoryStore;

/// Vector-backed [`InventoryStore`].
///
/// Rows keep insertion order, mirroring an unordered table scan.
#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    rows: Vec<(ProductId, Option<String>)>,
    pending_failure: Option<String>,
}

impl MemoryInventoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row.
    pub fn insert(&mut self, id: i32, name: Option<&str>) {
        self.rows
            .push((ProductId::new(id), name.map(ToOwned::to_owned)));
    }

    /// Make the next store call fail with a database error.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.pending_failure = Some(message.into());
    }

    fn check_failure(&mut self) -> Result<()> {
        match self.pending_failure.take() {
            Some(message) => Err(Error::Database(message)),
            None => Ok(()),
        }
    }
}

impl InventoryStore for MemoryInventoryStore {
    fn delete_product(&mut self, id: ProductId) -> Result<usize> {
        self.check_failure()?;
        let before = self.rows.len();
        self.rows.retain(|(row_id, _)| *row_id != id);
        Ok(before - self.rows.len())
    }

    fn product_names(&mut self, id: ProductId) -> Result<Vec<ProductName>> {
        self.check_failure()?;
        Ok(self
            .rows
            .iter()
            .filter(|(row_id, _)| *row_id == id)
            .map(|(_, name)| ProductName::from(name.clone()))
            .collect())
    }

    fn count_matching(&mut self, id: ProductId) -> Result<usize> {
        self.check_failure()?;
        Ok(self.rows.iter().filter(|(row_id, _)| *row_id == id).count())
    }

    fn count_all(&mut self) -> Result<usize> {
        self.check_failure()?;
        Ok(self.rows.len())
    }
}
