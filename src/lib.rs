//! # pscan - A Small Sequential TCP Port Prober
//!
//! pscan checks which TCP ports on a single IPv4 host accept connections.
//! Ports are probed one at a time with a non-blocking connect bounded by a
//! timeout, and each result is printed as soon as it is known.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pscan::scanner::{execute_scan, TcpConnectScanner};
//! use pscan::types::{resolve_ports, ScanTarget};
//!
//! let target = ScanTarget::parse("192.168.1.1", 500).unwrap();
//! let scanner = TcpConnectScanner::from(target);
//! let ports = resolve_ports("22,80,8000-8010");
//!
//! execute_scan(&scanner, &ports, &mut std::io::stdout()).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port and target types, port specification resolution
//! - [`scanner`] - The TCP connect probe and the sequential scan loop
//! - [`config`] - Scan defaults and the settings file
//! - [`cli`] - Command-line arguments and request validation
//! - [`output`] - Status lines, messages and logging
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ScanError};
pub use scanner::{execute_scan, probe, scan_range, PortResult, PortStatus, Scanner};
pub use types::{resolve_ports, Port, PortRange, PortSpec, ScanTarget};
