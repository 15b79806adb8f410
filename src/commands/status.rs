//! Implementation of the `tradectl status` command.

use super::{load_config_lenient, print_log_tail};
use crate::context::SupervisorContext;
use crate::error::Result;
use crate::supervisor::Supervisor;
use crate::supervisor::logtail::{format_age, last_activity};
use crate::supervisor::status::running_pid;
use chrono::Utc;

/// Execute the `tradectl status` command.
///
/// Read-only: never touches the pid file, even when it is stale.
pub fn cmd_status(ctx: &SupervisorContext, sv: &Supervisor<'_>) -> Result<()> {
    let config = load_config_lenient(ctx);
    let pid = running_pid(sv)?;

    println!("Service is running (pid {})", pid);
    if let Some(when) = last_activity(&ctx.log_path) {
        println!(
            "  Last log activity: {} ago",
            format_age(Utc::now().signed_duration_since(when))
        );
    }
    print_log_tail(&ctx.log_path, config.status_tail_lines);
    Ok(())
}
