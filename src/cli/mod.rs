//! CLI argument parsing for tradectl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// tradectl: minimal supervisor for a single long-running trading agent.
///
/// State lives in the current directory:
/// - `trade.pid` holds the pid of the running service
/// - `trade.log` receives the service's stdout and stderr
/// - `tradectl.yaml` (optional) describes how to launch the service
#[derive(Parser, Debug)]
#[command(name = "tradectl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print diagnostic logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tradectl.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the service in the background.
    ///
    /// Detaches it from the terminal, records its pid, and verifies it stays up.
    Start,

    /// Stop the service.
    ///
    /// Sends SIGTERM, waits up to 30 seconds, then sends SIGKILL.
    Stop,

    /// Show whether the service is running, with recent log output.
    Status,

    /// Stop the service if it is running, then start it again.
    Restart,

    /// Print the most recent lines of the service log.
    Logs(LogsArgs),
}

/// Arguments for the `logs` command.
#[derive(Parser, Debug, PartialEq, Eq)]
pub struct LogsArgs {
    /// Number of lines to show.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub lines: usize,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
