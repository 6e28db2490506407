//! Path utilities for galpao.
//!
//! User-level files live under `~/.galpao/`:
//! - `~/.galpao/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the galpao home directory (`~/.galpao/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".galpao")
}

/// Returns the default config file path (`~/.galpao/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_galpao_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().ends_with("config.toml"));
    }
}
