//! Plain text output.

use crate::scanner::PortResult;
use crate::types::SkippedToken;
use console::style;
use std::io::{self, Write};

/// Write one status line and flush it immediately.
///
/// The line is never styled so it reads the same on a terminal and in a pipe.
pub fn write_status<W: Write + ?Sized>(out: &mut W, result: &PortResult) -> io::Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Warn about each port token that resolution dropped.
pub fn print_skipped(skipped: &[SkippedToken]) {
    for token in skipped {
        print_warning(&format!(
            "ignoring port token {}: {}",
            style(format!("{:?}", token.token)).bold(),
            token.reason
        ));
    }
}
