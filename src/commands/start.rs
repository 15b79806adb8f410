//! Implementation of the `tradectl start` command.

use crate::config::Config;
use crate::context::SupervisorContext;
use crate::error::Result;
use crate::process::Spawner;
use crate::supervisor::Supervisor;
use crate::supervisor::launcher::{LaunchReport, launch, launch_spec};

/// Execute the `tradectl start` command.
///
/// The config is loaded strictly here: launching with a misread command line
/// is worse than refusing to start.
pub fn cmd_start(
    ctx: &SupervisorContext,
    sv: &Supervisor<'_>,
    spawner: &dyn Spawner,
) -> Result<()> {
    let config = Config::load_or_default(&ctx.config_path)?;
    start_service(ctx, sv, spawner, &config)?;
    Ok(())
}

/// Launch the service and print the outcome. Shared with `restart`.
pub(super) fn start_service(
    ctx: &SupervisorContext,
    sv: &Supervisor<'_>,
    spawner: &dyn Spawner,
    config: &Config,
) -> Result<LaunchReport> {
    let spec = launch_spec(config, ctx)?;
    let report = launch(sv, spawner, &spec, config.verify_delay())?;

    if let Some(stale) = report.replaced_stale {
        eprintln!(
            "Warning: replaced stale pid file (pid {} was not running)",
            stale
        );
    }
    println!("Service started (pid {})", report.pid);
    println!("  Command: {}", spec.display_command());
    println!("  Log:     {}", ctx.log_path.display());

    Ok(report)
}
