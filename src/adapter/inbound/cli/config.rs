//! Config resolution and the `config` subcommand.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{output, paths};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the default path is used when
/// present, otherwise built-in defaults with environment overrides.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        return Ok((Config::load(path)?, ConfigSource::File(path.to_path_buf())));
    }

    let default = paths::default_config();
    if default.is_file() {
        debug!(path = %default.display(), "Using default config file");
        return Ok((Config::load(&default)?, ConfigSource::File(default)));
    }

    Ok((Config::from_env()?, ConfigSource::Defaults))
}

/// Print the effective configuration as TOML. The password is never shown.
pub fn execute_show(config: &Config, source: &ConfigSource) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;

    output::section("Effective Configuration");
    output::field("Source", source);
    output::field("Target", config.target()?);
    output::raw(&rendered);

    Ok(())
}
