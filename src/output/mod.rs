//! Output module.
//!
//! Status lines go to stdout, one per probed port. Messages and log
//! events go to stderr so stdout stays a clean list of results.

mod logging;
mod plain;

pub use logging::{init_logging, LogLevel, StatusFormatter};
pub use plain::{print_error, print_skipped, print_warning, write_status};
