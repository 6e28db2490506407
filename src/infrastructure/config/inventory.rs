//! Which inventory rows a run touches.

use serde::{Deserialize, Serialize};

/// Row identifiers for the delete and the read-back.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct InventoryConfig {
    /// `idestoques` of the row to delete. Defaults to 3.
    #[serde(default = "default_delete_id")]
    pub delete_id: i32,
    /// `idestoques` of the row to read back. Defaults to 1.
    #[serde(default = "default_verify_id")]
    pub verify_id: i32,
}

fn default_delete_id() -> i32 {
    3
}

fn default_verify_id() -> i32 {
    1
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            delete_id: default_delete_id(),
            verify_id: default_verify_id(),
        }
    }
}
