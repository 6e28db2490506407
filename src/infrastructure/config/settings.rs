//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `GALPAO_DB_PASSWORD`. Every field has a default,
//! so an empty file (or no file at all) targets `root@localhost/galpao`.
//!
//! # Example
//!
//! ```no_run
//! use galpao::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::database::{Backend, DatabaseConfig};
use super::inventory::InventoryConfig;
use super::logging::LoggingConfig;
use crate::adapter::outbound::database::DatabaseTarget;
use crate::application::PurgeRequest;
use crate::domain::ProductId;
use crate::error::{ConfigError, Result};

/// Environment variable holding the database password.
pub const PASSWORD_ENV: &str = "GALPAO_DB_PASSWORD";

/// Environment variable holding a full connection URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Rows to delete and read back.
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, reading secrets from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Built-in defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override fails validation.
    pub fn from_env() -> Result<Self> {
        Self::parse_toml("")
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Password never comes from the config file.
        self.database.password = env(PASSWORD_ENV);
        self.database.url = env(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty());
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or missing field.
    pub fn validate(&self) -> Result<()> {
        let db = &self.database;
        if db.url.is_none() {
            match db.backend {
                Backend::Mysql => {
                    if db.host.trim().is_empty() {
                        return Err(ConfigError::MissingField { field: "host" }.into());
                    }
                    if db.user.trim().is_empty() {
                        return Err(ConfigError::MissingField { field: "user" }.into());
                    }
                    if db.name.trim().is_empty() {
                        return Err(ConfigError::MissingField { field: "name" }.into());
                    }
                    if db.port == 0 {
                        return Err(ConfigError::InvalidValue {
                            field: "port",
                            reason: "must be greater than 0".to_string(),
                        }
                        .into());
                    }
                }
                Backend::Sqlite => {
                    if db.path.trim().is_empty() {
                        return Err(ConfigError::MissingField { field: "path" }.into());
                    }
                }
            }
        }

        if self.inventory.delete_id <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "delete_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.inventory.verify_id <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "verify_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Resolve where to connect.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL override or host cannot be parsed.
    pub fn target(&self) -> Result<DatabaseTarget> {
        let db = &self.database;
        if let Some(url) = &db.url {
            return DatabaseTarget::from_url(url);
        }
        match db.backend {
            Backend::Mysql => DatabaseTarget::mysql(
                &db.host,
                db.port,
                &db.user,
                db.password.as_deref(),
                &db.name,
            ),
            Backend::Sqlite => Ok(DatabaseTarget::Sqlite(db.path.clone())),
        }
    }

    /// Purge request for the configured rows.
    #[must_use]
    pub fn purge_request(&self) -> PurgeRequest {
        PurgeRequest {
            delete_id: ProductId::new(self.inventory.delete_id),
            verify_id: ProductId::new(self.inventory.verify_id),
            dry_run: false,
        }
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn empty_config_uses_original_defaults() {
        let config = Config::parse_toml_with_env("", no_env).unwrap();

        assert_eq!(config.database.backend, Backend::Mysql);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.name, "galpao");
        assert_eq!(config.inventory.delete_id, 3);
        assert_eq!(config.inventory.verify_id, 1);
        assert_eq!(
            config.target().unwrap().to_string(),
            "mysql://root@localhost:3306/galpao"
        );
    }

    #[test]
    fn password_comes_from_env_only() {
        let toml = "[database]\npassword = \"in-file\"\n";
        let config = Config::parse_toml_with_env(toml, |key| {
            (key == PASSWORD_ENV).then(|| "from-env".to_string())
        })
        .unwrap();

        assert_eq!(config.database.password.as_deref(), Some("from-env"));
        let target = config.target().unwrap();
        let DatabaseTarget::Mysql(url) = target else {
            panic!("expected mysql target");
        };
        assert_eq!(url.password(), Some("from-env"));
    }

    #[test]
    fn database_url_overrides_fields() {
        let toml = "[database]\nbackend = \"mysql\"\nhost = \"ignored\"\n";
        let config = Config::parse_toml_with_env(toml, |key| {
            (key == DATABASE_URL_ENV).then(|| "sqlite:///tmp/galpao.db".to_string())
        })
        .unwrap();

        assert_eq!(
            config.target().unwrap(),
            DatabaseTarget::Sqlite("/tmp/galpao.db".to_string())
        );
    }

    #[test]
    fn sqlite_backend_uses_path() {
        let toml = "[database]\nbackend = \"sqlite\"\npath = \"stock.db\"\n";
        let config = Config::parse_toml_with_env(toml, no_env).unwrap();
        assert_eq!(
            config.target().unwrap(),
            DatabaseTarget::Sqlite("stock.db".to_string())
        );
    }

    #[test]
    fn inventory_ids_are_configurable() {
        let toml = "[inventory]\ndelete_id = 10\nverify_id = 11\n";
        let config = Config::parse_toml_with_env(toml, no_env).unwrap();
        let request = config.purge_request();
        assert_eq!(request.delete_id, ProductId::new(10));
        assert_eq!(request.verify_id, ProductId::new(11));
        assert!(!request.dry_run);
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = Config::parse_toml_with_env("[inventory]\ndelete_id = 0\n", no_env).unwrap_err();
        assert!(err.to_string().contains("delete_id"));

        let err =
            Config::parse_toml_with_env("[inventory]\nverify_id = -1\n", no_env).unwrap_err();
        assert!(err.to_string().contains("verify_id"));
    }

    #[test]
    fn rejects_empty_mysql_fields() {
        let err = Config::parse_toml_with_env("[database]\nhost = \"\"\n", no_env).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: host");

        let err = Config::parse_toml_with_env("[database]\nport = 0\n", no_env).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn empty_fields_allowed_when_url_overrides() {
        let config = Config::parse_toml_with_env("[database]\nhost = \"\"\n", |key| {
            (key == DATABASE_URL_ENV).then(|| "mysql://app@db/galpao".to_string())
        });
        assert!(config.is_ok());
    }

    #[test]
    fn rejects_unknown_logging_format() {
        let err =
            Config::parse_toml_with_env("[logging]\nformat = \"xml\"\n", no_env).unwrap_err();
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse_toml_with_env("[database\n", no_env).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn rejects_unknown_backend() {
        let err =
            Config::parse_toml_with_env("[database]\nbackend = \"oracle\"\n", no_env).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Config::load("/nonexistent/galpao/config.toml").unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
