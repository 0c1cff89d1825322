//! Scanner trait abstraction.
//!
//! Defines the probe interface so the driving loop can run against the
//! real TCP scanner or a scripted one in tests.

use crate::types::Port;
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Status of a probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortStatus {
    /// The connection completed.
    Open,
    /// Refused, unreachable, timed out, or the probe could not be started.
    ClosedOrUnresponsive,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::ClosedOrUnresponsive => write!(f, "closed or not responding"),
        }
    }
}

/// Result of probing a single port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortResult {
    pub port: Port,
    pub status: PortStatus,
    /// Wall time spent on the probe.
    pub response_time: Option<Duration>,
}

impl PortResult {
    pub fn new(port: Port, status: PortStatus) -> Self {
        Self {
            port,
            status,
            response_time: None,
        }
    }

    /// Set the response time.
    pub fn with_response_time(mut self, elapsed: Duration) -> Self {
        self.response_time = Some(elapsed);
        self
    }

    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

impl fmt::Display for PortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port {} is {}", self.port, self.status)
    }
}

/// Trait for port prober implementations.
///
/// Probes are synchronous and independent: an implementation keeps no
/// state between calls to [`Scanner::scan_port`].
pub trait Scanner {
    /// Probe a single port. Never fails; errors become
    /// [`PortStatus::ClosedOrUnresponsive`].
    fn scan_port(&self, port: Port) -> PortResult;

    /// Get the target address.
    fn target(&self) -> Ipv4Addr;

    /// Get the configured per-probe timeout.
    fn timeout(&self) -> Duration;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_status_display() {
        assert_eq!(PortStatus::Open.to_string(), "open");
        assert_eq!(
            PortStatus::ClosedOrUnresponsive.to_string(),
            "closed or not responding"
        );
    }

    #[test]
    fn test_port_result_line() {
        let port = Port::new(443).unwrap();
        let open = PortResult::new(port, PortStatus::Open);
        assert!(open.is_open());
        assert_eq!(open.to_string(), "Port 443 is open");

        let closed = PortResult::new(port, PortStatus::ClosedOrUnresponsive)
            .with_response_time(Duration::from_millis(12));
        assert!(!closed.is_open());
        assert_eq!(closed.response_time, Some(Duration::from_millis(12)));
        assert_eq!(closed.to_string(), "Port 443 is closed or not responding");
    }
}
