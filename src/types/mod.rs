//! Core type definitions using newtype patterns for type safety.

mod port;
mod target;

pub use port::{is_number, resolve_ports, Port, PortError, PortRange, PortSpec, SkippedToken};
pub use target::{parse_ipv4, ScanTarget, TargetError};
