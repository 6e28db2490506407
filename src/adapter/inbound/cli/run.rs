//! Handler for the `run` command.

use tracing::info;

use super::command::RunArgs;
use super::output;
use crate::adapter::outbound::database::DieselInventoryStore;
use crate::application::{PurgeRequest, PurgeService};
use crate::domain::PurgeReport;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Fold command-line overrides into the loaded configuration.
///
/// # Errors
/// Returns an error if an override fails validation.
pub fn apply_overrides(mut config: Config, args: &RunArgs) -> Result<(Config, PurgeRequest)> {
    if let Some(url) = &args.database_url {
        config.database.url = Some(url.clone());
    }
    if let Some(id) = args.delete_id {
        config.inventory.delete_id = id;
    }
    if let Some(id) = args.verify_id {
        config.inventory.verify_id = id;
    }
    config.validate()?;

    let request = PurgeRequest {
        dry_run: args.dry_run,
        ..config.purge_request()
    };
    Ok((config, request))
}

/// Execute the run command.
pub fn execute(config: Config, args: &RunArgs) -> Result<()> {
    let (config, request) = apply_overrides(config, args)?;
    let target = config.target()?;

    info!(
        target = %target,
        delete_id = %request.delete_id,
        verify_id = %request.verify_id,
        dry_run = request.dry_run,
        "Starting inventory purge"
    );

    let store = DieselInventoryStore::connect(&target)?;
    let report = PurgeService::new(store).execute(request)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &PurgeReport) {
    if output::verbosity() > 0 {
        output::field("Deleted id", report.deleted_id);
        output::field("Rows", report.rows_deleted);
    }
    if let Some(matching) = report.would_delete {
        output::warning(&format!(
            "Dry run: {matching} row(s) with idestoques = {} kept",
            report.deleted_id
        ));
    }
    output::purge_result(report);
}
