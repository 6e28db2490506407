//! Database connection settings.
//!
//! The password is never read from the config file; it comes from the
//! `GALPAO_DB_PASSWORD` environment variable.

use serde::{Deserialize, Serialize};

/// Supported database backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// MySQL server.
    #[default]
    Mysql,
    /// Local SQLite file.
    Sqlite,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    /// Schema name.
    #[serde(default = "default_name")]
    pub name: String,
    /// SQLite file path (sqlite backend only).
    #[serde(default = "default_path")]
    pub path: String,
    /// Loaded from `GALPAO_DB_PASSWORD` at runtime.
    #[serde(skip)]
    pub password: Option<String>,
    /// Full connection URL from `DATABASE_URL` or `--database-url`.
    /// Overrides every other field when set.
    #[serde(skip)]
    pub url: Option<String>,
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".into()
}

fn default_name() -> String {
    "galpao".into()
}

fn default_path() -> String {
    "galpao.db".into()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            host: default_host(),
            port: default_port(),
            user: default_user(),
            name: default_name(),
            path: default_path(),
            password: None,
            url: None,
        }
    }
}
