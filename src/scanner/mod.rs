//! Scanner module - drives probes over a resolved port list.
//!
//! Scanning is strictly sequential: one port is probed at a time, in the
//! order the ports were resolved, and each status line is written and
//! flushed as soon as its probe finishes.

pub mod tcp;
mod traits;

pub use tcp::TcpConnectScanner;
pub use traits::{PortResult, PortStatus, Scanner};

use crate::output;
use crate::types::{parse_ipv4, Port, PortRange};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// Probe one `(host, port)` pair with a timeout in milliseconds.
///
/// An invalid host literal or a port outside 1-65535 is reported as
/// [`PortStatus::ClosedOrUnresponsive`] like any other failed probe.
pub fn probe(host: &str, port: u32, timeout_ms: u64) -> PortStatus {
    let Some(port) = Port::from_u32(port) else {
        debug!(port, "port out of range, not probing");
        return PortStatus::ClosedOrUnresponsive;
    };

    match parse_ipv4(host) {
        Ok(ip) => {
            TcpConnectScanner::new(ip, Duration::from_millis(timeout_ms))
                .scan_port(port)
                .status
        }
        Err(e) => {
            debug!(error = %e, "not probing");
            PortStatus::ClosedOrUnresponsive
        }
    }
}

/// Probe every port in order, writing one status line per port to `out`.
///
/// Probe failures never stop the scan; only a failure to write to `out`
/// is returned.
pub fn execute_scan<S, W>(scanner: &S, ports: &[Port], out: &mut W) -> io::Result<()>
where
    S: Scanner + ?Sized,
    W: Write,
{
    debug!(
        host = %scanner.target(),
        timeout_ms = scanner.timeout().as_millis() as u64,
        ports = ports.len(),
        "starting scan"
    );

    for &port in ports {
        let result = scanner.scan_port(port);
        debug!(
            port = %result.port,
            status = %result.status,
            elapsed_ms = result.response_time.map(|d| d.as_millis() as u64),
            "probe finished"
        );
        output::write_status(out, &result)?;
    }

    Ok(())
}

/// Probe a contiguous range of ports, ascending.
pub fn scan_range<S, W>(scanner: &S, range: PortRange, out: &mut W) -> io::Result<()>
where
    S: Scanner + ?Sized,
    W: Write,
{
    let ports: Vec<Port> = range.iter().collect();
    execute_scan(scanner, &ports, out)
}
