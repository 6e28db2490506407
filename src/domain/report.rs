//! Outcome of a purge run.

use std::fmt;

use serde::Serialize;

use super::{ProductId, ProductName};

/// Result of deleting one inventory row and reading back another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    /// Row targeted by the DELETE.
    pub deleted_id: ProductId,
    /// Rows actually removed. Zero when the row was already gone or in dry-run.
    pub rows_deleted: usize,
    /// Rows that matched the delete id but were kept because of dry-run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub would_delete: Option<usize>,
    /// Row read back after the commit.
    pub verify_id: ProductId,
    /// `nome_produto` values for the verify id, in result-set order.
    pub products: Vec<ProductName>,
}

impl PurgeReport {
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.would_delete.is_some()
    }

    /// Render the fetched rows as a bracketed list, e.g. `["Cabo", NULL]`.
    #[must_use]
    pub fn products_display(&self) -> String {
        let items: Vec<String> = self.products.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }
}

impl fmt::Display for PurgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Produto atualizado: {}", self.products_display())
    }
}
