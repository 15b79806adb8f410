//! Command implementations for tradectl.
//!
//! `dispatch` wires the real OS capabilities (pid file in the working
//! directory, the system process table, the wall clock) into the supervisor
//! and routes each CLI command to its handler. Handlers take the capabilities
//! as parameters so they can be exercised against fakes.

mod logs;
mod restart;
mod start;
mod status;
mod stop;


use crate::cli::Command;
use crate::config::Config;
use crate::context::SupervisorContext;
use crate::error::Result;
use crate::process::{DetachedSpawner, SystemClock, SystemProcessTable};
use crate::record::FileRecordStore;
use crate::supervisor::Supervisor;
use crate::supervisor::logtail::tail_lines;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let ctx = SupervisorContext::resolve()?;
    let records = FileRecordStore::new(&ctx.pid_path);
    let sv = Supervisor::new(&records, &SystemProcessTable, &SystemClock);

    match command {
        Command::Start => start::cmd_start(&ctx, &sv, &DetachedSpawner),
        Command::Stop => stop::cmd_stop(&ctx, &sv),
        Command::Status => status::cmd_status(&ctx, &sv),
        Command::Restart => restart::cmd_restart(&ctx, &sv, &DetachedSpawner),
        Command::Logs(args) => logs::cmd_logs(&ctx, args),
    }
}

/// Load the config for commands that must work even when it is broken.
///
/// `stop` and `status` only read display settings from it, so a bad file
/// must not prevent stopping the service.
fn load_config_lenient(ctx: &SupervisorContext) -> Config {
    match Config::load_or_default(&ctx.config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            Config::default()
        }
    }
}

/// Print the log tail after a command's real work is done.
///
/// The log is display-only here, so a read failure is a warning and never
/// changes the command's outcome.
fn print_log_tail(log_path: &Path, n: usize) {
    if let Err(e) = show_log_tail(log_path, n) {
        eprintln!("Warning: cannot read log: {}", e);
    }
}

/// Print the last `n` lines of the log stream under a header.
fn show_log_tail(log_path: &Path, n: usize) -> Result<()> {
    let name = log_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| log_path.display().to_string());

    match tail_lines(log_path, n)? {
        None => println!("(no log output yet: {} does not exist)", log_path.display()),
        Some(lines) if lines.is_empty() => println!("(no log output yet: {} is empty)", name),
        Some(lines) => {
            println!("--- last {} line(s) of {} ---", lines.len(), name);
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
