//! Scan target: an IPv4 literal plus the per-probe timeout.
//!
//! No hostname resolution happens here. Only dotted-decimal literals
//! are accepted.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;

/// A host to probe and how long each probe may wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTarget {
    pub ip: Ipv4Addr,
    pub timeout: Duration,
}

impl ScanTarget {
    pub fn new(ip: Ipv4Addr, timeout: Duration) -> Self {
        Self { ip, timeout }
    }

    /// Parse a dotted-decimal host and a timeout in milliseconds.
    pub fn parse(host: &str, timeout_ms: u64) -> Result<Self, TargetError> {
        Ok(Self::new(parse_ipv4(host)?, Duration::from_millis(timeout_ms)))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (timeout {}ms)", self.ip, self.timeout.as_millis())
    }
}

/// Error type for target parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),
}

/// Parse a strict dotted-decimal IPv4 literal.
pub fn parse_ipv4(host: &str) -> Result<Ipv4Addr, TargetError> {
    Ipv4Addr::from_str(host).map_err(|_| TargetError::InvalidAddress(host.to_string()))
}
