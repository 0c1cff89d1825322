//! Error types for pscan.
//!
//! Uses `thiserror` for ergonomic error definitions. None of these ever
//! escape a probe or port resolution; they describe why a probe failed
//! internally and why the command line or settings were rejected.

use crate::types::TargetError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single connection probe.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Connection timed out")]
    Timeout,

    #[error("Connection refused")]
    ConnectionRefused,

    #[error("Host unreachable")]
    HostUnreachable,

    #[error("Network unreachable")]
    NetworkUnreachable,

    #[error("Connection failed: {0}")]
    ConnectionFailed(io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Classify the pending error of a finished connect attempt.
    pub fn from_connect_error(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(libc::ECONNREFUSED) => Self::ConnectionRefused,
            Some(libc::EHOSTUNREACH) => Self::HostUnreachable,
            Some(libc::ENETUNREACH) => Self::NetworkUnreachable,
            Some(libc::ETIMEDOUT) => Self::Timeout,
            _ => Self::ConnectionFailed(err),
        }
    }
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced to the command line before scanning starts.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Host is required.")]
    MissingHost,

    #[error(transparent)]
    InvalidHost(#[from] TargetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CliResult<T> = Result<T, CliError>;
