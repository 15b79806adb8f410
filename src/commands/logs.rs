//! Implementation of the `tradectl logs` command.

use super::show_log_tail;
use crate::cli::LogsArgs;
use crate::context::SupervisorContext;
use crate::error::Result;

/// Execute the `tradectl logs` command.
pub fn cmd_logs(ctx: &SupervisorContext, args: LogsArgs) -> Result<()> {
    show_log_tail(&ctx.log_path, args.lines)
}
