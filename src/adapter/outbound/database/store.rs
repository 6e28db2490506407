//! Diesel inventory store implementation.

use diesel::prelude::*;
use tracing::debug;

use super::connection::{establish, DatabaseTarget, InventoryConnection};
use super::schema::estoques;
use crate::domain::{ProductId, ProductName};
use crate::error::{Error, Result};
use crate::port::outbound::store::InventoryStore;

/// [`InventoryStore`] over one owned Diesel connection.
///
/// The connection closes when the store is dropped, on success and error
/// paths alike.
pub struct DieselInventoryStore {
    conn: InventoryConnection,
}

impl DieselInventoryStore {
    #[must_use]
    pub fn new(conn: InventoryConnection) -> Self {
        Self { conn }
    }

    /// Open a connection to the target and wrap it.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub fn connect(target: &DatabaseTarget) -> Result<Self> {
        Ok(Self::new(establish(target)?))
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.conn.backend_name()
    }
}

fn to_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|e| Error::Database(e.to_string()))
}

impl InventoryStore for DieselInventoryStore {
    fn delete_product(&mut self, id: ProductId) -> Result<usize> {
        let deleted = self
            .conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::delete(estoques::table.filter(estoques::idestoques.eq(id.value())))
                    .execute(conn)
            })?;
        debug!(id = %id, rows = deleted, "Delete committed");
        Ok(deleted)
    }

    fn product_names(&mut self, id: ProductId) -> Result<Vec<ProductName>> {
        let names = estoques::table
            .filter(estoques::idestoques.eq(id.value()))
            .select(estoques::nome_produto)
            .load::<Option<String>>(&mut self.conn)?;
        Ok(names.into_iter().map(ProductName::from).collect())
    }

    fn count_matching(&mut self, id: ProductId) -> Result<usize> {
        let count: i64 = estoques::table
            .filter(estoques::idestoques.eq(id.value()))
            .count()
            .get_result(&mut self.conn)?;
        to_count(count)
    }

    fn count_all(&mut self) -> Result<usize> {
        let count: i64 = estoques::table.count().get_result(&mut self.conn)?;
        to_count(count)
    }
}
