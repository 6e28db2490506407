use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::SqliteConnection;
use tempfile::TempDir;

/// Temporary SQLite inventory database for integration tests.
///
/// Seeded with rows 1 (Martelo), 2 (Serrote) and 3 (Alicate).
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("galpao-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join("galpao.db");

        let db = Self { _dir: dir, path };
        let mut conn = db.connect();
        diesel::sql_query(
            "CREATE TABLE estoques (idestoques INTEGER PRIMARY KEY, nome_produto TEXT)",
        )
        .execute(&mut conn)
        .expect("create estoques");
        for (id, name) in [(1, "Martelo"), (2, "Serrote"), (3, "Alicate")] {
            db.insert(id, Some(name));
        }
        db
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    pub fn connect(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.path.to_string_lossy()).expect("open sqlite fixture")
    }

    pub fn insert(&self, id: i32, name: Option<&str>) {
        let mut conn = self.connect();
        diesel::sql_query("INSERT INTO estoques (idestoques, nome_produto) VALUES (?, ?)")
            .bind::<Integer, _>(id)
            .bind::<Nullable<Text>, _>(name)
            .execute(&mut conn)
            .expect("insert fixture row");
    }

    pub fn count(&self, id: i32) -> i64 {
        let mut conn = self.connect();
        diesel::sql_query("SELECT COUNT(*) AS count FROM estoques WHERE idestoques = ?")
            .bind::<Integer, _>(id)
            .get_result::<Count>(&mut conn)
            .expect("count rows")
            .count
    }

    pub fn total(&self) -> i64 {
        let mut conn = self.connect();
        diesel::sql_query("SELECT COUNT(*) AS count FROM estoques")
            .get_result::<Count>(&mut conn)
            .expect("count rows")
            .count
    }
}
