//! Command-line interface definitions for pscan.
//!
//! Uses `clap` derive macros for declarative argument parsing. `-h` selects
//! the host, so help is only available as `--help`.

mod scan;

pub use scan::ScanRequest;

use crate::output::LogLevel;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

/// Probe TCP ports on a single IPv4 host.
#[derive(Parser, Debug)]
#[command(name = "pscan")]
#[command(version)]
#[command(about = "A small sequential TCP port prober", long_about = None)]
#[command(override_usage = "pscan -h <host> [-t <timeout in ms>] [-p <port range or list>]")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Specify the host IP to scan
    #[arg(short = 'h', long, value_name = "HOST")]
    pub host: Option<String>,

    /// Set timeout in milliseconds (default 500ms)
    #[arg(short, long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Specify a single port, a list of ports, or a range (e.g., 80, 8080-8081)
    #[arg(short, long = "port", value_name = "PORTS")]
    pub ports: Option<String>,

    /// Warn on stderr about port tokens that were ignored
    #[arg(long)]
    pub warn_skipped: bool,

    /// Path to a JSON settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print status lines and fatal errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Display this help message
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.quiet, self.verbose)
    }

    /// Render the usage text, as printed after a missing host.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
