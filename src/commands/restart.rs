//! Implementation of the `tradectl restart` command.

use super::start::start_service;
use super::stop::print_stop_report;
use crate::config::Config;
use crate::context::SupervisorContext;
use crate::error::{Result, SupervisorError};
use crate::process::Spawner;
use crate::supervisor::Supervisor;
use crate::supervisor::terminator::terminate;

/// Execute the `tradectl restart` command.
///
/// A missing or stale pid file just means there is nothing to stop. The exit
/// status is that of the start.
pub fn cmd_restart(
    ctx: &SupervisorContext,
    sv: &Supervisor<'_>,
    spawner: &dyn Spawner,
) -> Result<()> {
    // Validate before stopping, so a bad config does not leave the service down.
    let config = Config::load_or_default(&ctx.config_path)?;

    match terminate(*sv) {
        Ok(report) => print_stop_report(&report),
        Err(SupervisorError::MissingRecord { .. }) => println!("Service was not running"),
        Err(SupervisorError::StaleRecord { pid }) => {
            println!("Service was not running (removed stale pid {})", pid)
        }
        Err(e) => return Err(e),
    }

    start_service(ctx, sv, spawner, &config)?;
    Ok(())
}
