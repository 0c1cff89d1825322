//! TCP Connect Scanner implementation.
//!
//! Each probe opens a fresh non-blocking IPv4 stream socket, starts a
//! connect, waits a bounded time for the socket to become writable and
//! then reads the pending socket error. No error leaves this module: every
//! failure is folded into [`PortStatus::ClosedOrUnresponsive`].

use crate::error::{ScanError, ScanResult};
use crate::scanner::{PortResult, PortStatus, Scanner};
use crate::types::{Port, ScanTarget};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::{Duration, Instant};
use tracing::trace;

/// TCP Connect Scanner.
///
/// Uses a non-blocking `connect()` to determine port status.
/// Does not require elevated privileges.
#[derive(Debug, Clone, Copy)]
pub struct TcpConnectScanner {
    target: Ipv4Addr,
    timeout: Duration,
}

impl TcpConnectScanner {
    /// Create a new TCP connect scanner.
    ///
    /// # Arguments
    /// * `target` - Target IPv4 address to scan
    /// * `timeout` - Upper bound on the wait for each connection
    pub fn new(target: Ipv4Addr, timeout: Duration) -> Self {
        Self { target, timeout }
    }

    /// Attempt to connect to the target address.
    ///
    /// The socket is owned by this call and closed when it returns.
    #[cfg(unix)]
    fn attempt_connect(&self, addr: SocketAddrV4) -> ScanResult<()> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_nonblocking(true)?;

        match socket.connect(&SockAddr::from(addr)) {
            Ok(()) => return Ok(()),
            Err(e) if connect_in_progress(&e) => {}
            Err(e) => return Err(ScanError::from_connect_error(e)),
        }

        trace!(%addr, "connect in progress");
        wait_writable(&socket, self.timeout)?;

        match socket.take_error()? {
            None => Ok(()),
            Some(e) => Err(ScanError::from_connect_error(e)),
        }
    }

    #[cfg(not(unix))]
    fn attempt_connect(&self, addr: SocketAddrV4) -> ScanResult<()> {
        if self.timeout.is_zero() {
            return Err(ScanError::Timeout);
        }
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket
            .connect_timeout(&SockAddr::from(addr), self.timeout)
            .map_err(|e| match e.kind() {
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ScanError::Timeout,
                _ => ScanError::from_connect_error(e),
            })
    }
}

impl From<ScanTarget> for TcpConnectScanner {
    fn from(target: ScanTarget) -> Self {
        Self::new(target.ip, target.timeout)
    }
}

impl Scanner for TcpConnectScanner {
    fn target(&self) -> Ipv4Addr {
        self.target
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn scan_port(&self, port: Port) -> PortResult {
        let addr = SocketAddrV4::new(self.target, port.as_u16());
        let start = Instant::now();

        let status = match self.attempt_connect(addr) {
            Ok(()) => PortStatus::Open,
            Err(e) => {
                trace!(%addr, error = %e, "probe failed");
                PortStatus::ClosedOrUnresponsive
            }
        };

        PortResult::new(port, status).with_response_time(start.elapsed())
    }
}

#[cfg(unix)]
fn connect_in_progress(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EINPROGRESS) || err.kind() == io::ErrorKind::WouldBlock
}

/// Block until `socket` is writable or `timeout` elapses.
#[cfg(unix)]
fn wait_writable(socket: &Socket, timeout: Duration) -> ScanResult<()> {
    use std::os::unix::io::AsRawFd;

    let deadline = Instant::now().checked_add(timeout);
    let mut pfd = libc::pollfd {
        fd: socket.as_raw_fd(),
        events: libc::POLLOUT,
        revents: 0,
    };

    loop {
        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => timeout,
        };

        // SAFETY: `pfd` is a single valid pollfd for a socket we own.
        let ready = unsafe { libc::poll(&mut pfd, 1, poll_millis(remaining)) };
        match ready {
            0 => return Err(ScanError::Timeout),
            n if n > 0 => return Ok(()),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() != io::ErrorKind::Interrupted {
                    return Err(err.into());
                }
            }
        }
    }
}

/// Round a remaining wait up to whole milliseconds for poll(2).
#[cfg(unix)]
fn poll_millis(remaining: Duration) -> libc::c_int {
    let mut millis = remaining.as_millis();
    if remaining.subsec_nanos() % 1_000_000 != 0 {
        millis += 1;
    }
    libc::c_int::try_from(millis).unwrap_or(libc::c_int::MAX)
}
