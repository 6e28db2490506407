//! Persistence port for the `estoques` inventory table.

use crate::domain::{ProductId, ProductName};
use crate::error::Result;

/// Storage operations on inventory rows.
///
/// Implementations own a single connection; every call is blocking.
pub trait InventoryStore {
    /// Delete the row with the given id and commit. Returns rows affected.
    ///
    /// Zero means the row did not exist. A failure rolls the delete back.
    fn delete_product(&mut self, id: ProductId) -> Result<usize>;

    /// Fetch every `nome_produto` stored under the given id, in result order.
    fn product_names(&mut self, id: ProductId) -> Result<Vec<ProductName>>;

    /// Count rows stored under the given id.
    fn count_matching(&mut self, id: ProductId) -> Result<usize>;

    /// Count every row in the table.
    fn count_all(&mut self) -> Result<usize>;
}
