//! Implementation of the `tradectl stop` command.

use super::{load_config_lenient, print_log_tail};
use crate::context::SupervisorContext;
use crate::error::{Result, SupervisorError};
use crate::supervisor::Supervisor;
use crate::supervisor::terminator::{StopReport, terminate};

/// Execute the `tradectl stop` command.
///
/// On success prints the tail of the log, so the service's last words are
/// visible. A stale pid file is removed and reported as a failure.
pub fn cmd_stop(ctx: &SupervisorContext, sv: &Supervisor<'_>) -> Result<()> {
    let config = load_config_lenient(ctx);

    let report = match terminate(*sv) {
        Ok(report) => report,
        Err(err @ SupervisorError::StaleRecord { .. }) => {
            eprintln!(
                "Warning: removed stale pid file '{}'",
                sv.records.location().display()
            );
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    print_stop_report(&report);
    print_log_tail(&ctx.log_path, config.stop_tail_lines);
    Ok(())
}

pub(super) fn print_stop_report(report: &StopReport) {
    if report.escalated {
        println!(
            "Service stopped (pid {}, killed after {}s grace period)",
            report.pid,
            report.waited.as_secs()
        );
    } else {
        println!("Service stopped (pid {})", report.pid);
    }
}
