//! Handlers for `check config` and `check connection`.

use super::command::ConnectionArgs;
use super::config::ConfigSource;
use super::output;
use crate::adapter::outbound::database::DieselInventoryStore;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::store::InventoryStore;

/// Validate configuration without touching the database.
pub fn execute_config(config: &Config, source: &ConfigSource) -> Result<()> {
    let target = config.target()?;

    output::section("Configuration Check");
    output::field("Config", source);
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Backend", target.backend_name());
    output::field("Target", &target);
    output::field("Delete id", config.inventory.delete_id);
    output::field("Verify id", config.inventory.verify_id);
    output::field("Log level", &config.logging.level);

    if config.database.password.is_some() {
        output::success("Database password detected");
    } else if target.backend_name() == "mysql" && config.database.url.is_none() {
        output::warning("GALPAO_DB_PASSWORD not set; connecting without a password");
    }

    Ok(())
}

/// Connect and count inventory rows.
pub fn execute_connection(mut config: Config, args: &ConnectionArgs) -> Result<()> {
    if let Some(url) = &args.database_url {
        config.database.url = Some(url.clone());
    }
    let target = config.target()?;

    output::section("Connection Check");
    output::field("Backend", target.backend_name());
    output::field("Target", &target);

    let mut store = match DieselInventoryStore::connect(&target) {
        Ok(store) => store,
        Err(e) => {
            output::error("Connection failed");
            return Err(e);
        }
    };
    output::success("Connected");

    let rows = store.count_all()?;
    output::field("Rows", rows);
    output::success("Inventory table reachable");

    Ok(())
}
