//! Port types and port specification resolution.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` and `PortSpec` turn a textual specification such as
//! `"22,8000-8010,443"` into an ordered list of ports.

use std::fmt;
use tracing::debug;

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Create a Port from a wider integer, returning None if out of range.
    pub fn from_u32(port: u32) -> Option<Self> {
        u16::try_from(port).ok().and_then(Self::new)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Port {
    type Error = PortError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or_else(|| PortError::OutOfRange(value.to_string()))
    }
}

/// Reason a port specification token was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(String),
    #[error("invalid port number: {0:?}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty token")]
    Empty,
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// A valid range always holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A token of a port specification that did not yield any port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// The token exactly as it appeared between commas.
    pub token: String,
    pub reason: PortError,
}

/// A resolved port specification.
///
/// Resolution is lenient: tokens that are malformed, out of range, or
/// describe an inverted range are dropped and remembered in
/// [`PortSpec::skipped`]; they never fail the whole specification.
/// Ranges keep encounter order and duplicates are preserved. Each number
/// is plain decimal digits with an optional leading `+`; tokens are not
/// trimmed.
///
/// Supports formats like:
/// - Single port: "80"
/// - Comma-separated: "80,443,8080"
/// - Range: "1-1000"
/// - Mixed: "22,80,443,8000-9000"
#[derive(Debug, Clone, Default)]
pub struct PortSpec {
    ranges: Vec<PortRange>,
    skipped: Vec<SkippedToken>,
}

impl PortSpec {
    /// Create an empty port specification.
    pub const fn new() -> Self {
        Self {
            ranges: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Resolve a textual specification. Never fails.
    pub fn resolve(spec: &str) -> Self {
        let mut resolved = Self::new();
        if spec.is_empty() {
            return resolved;
        }

        for token in spec.split(',') {
            match parse_token(token) {
                Ok(range) => resolved.ranges.push(range),
                Err(reason) => {
                    debug!(token, %reason, "skipping port token");
                    resolved.skipped.push(SkippedToken {
                        token: token.to_string(),
                        reason,
                    });
                }
            }
        }

        resolved
    }

    /// All ports in encounter order, duplicates included.
    pub fn to_ports(&self) -> Vec<Port> {
        let mut ports = Vec::with_capacity(self.count());
        for range in &self.ranges {
            ports.extend(range.iter());
        }
        ports
    }

    /// Total number of ports, duplicates included.
    pub fn count(&self) -> usize {
        self.ranges.iter().map(PortRange::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Tokens that were dropped during resolution.
    pub fn skipped(&self) -> &[SkippedToken] {
        &self.skipped
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Resolve a port specification straight into an ordered list of ports.
pub fn resolve_ports(spec: &str) -> Vec<Port> {
    PortSpec::resolve(spec).to_ports()
}

/// Check that a string is a non-empty run of ASCII digits.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_token(token: &str) -> Result<PortRange, PortError> {
    if token.is_empty() {
        return Err(PortError::Empty);
    }

    match token.split_once('-') {
        Some((start, end)) => {
            let start = parse_port(start)?;
            let end = parse_port(end)?;
            PortRange::new(start, end)
        }
        None => parse_port(token).map(PortRange::single),
    }
}

fn parse_port(field: &str) -> Result<Port, PortError> {
    let digits = field.strip_prefix('+').unwrap_or(field);
    if !is_number(digits) {
        return Err(PortError::InvalidFormat(field.to_string()));
    }

    // Digits only, so a failed parse can only mean overflow.
    digits
        .parse::<u32>()
        .ok()
        .and_then(Port::from_u32)
        .ok_or_else(|| PortError::OutOfRange(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(spec: &str) -> Vec<u16> {
        resolve_ports(spec).into_iter().map(Port::as_u16).collect()
    }

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(65535).is_some());
        assert!(Port::from_u32(65536).is_none());
        assert!(Port::try_from(70000u32).is_err());
    }

    #[test]
    fn test_port_range() {
        let start = Port::new(1).unwrap();
        let end = Port::new(100).unwrap();
        let range = PortRange::new(start, end).unwrap();
        assert_eq!(range.len(), 100);
        assert!(PortRange::new(end, start).is_err());
    }

    #[test]
    fn test_full_range_len() {
        let range = PortRange::new(Port::new(1).unwrap(), Port::new(65535).unwrap()).unwrap();
        assert_eq!(range.len(), 65535);
        assert_eq!(range.iter().last().map(Port::as_u16), Some(65535));
    }

    #[test]
    fn test_resolve_list() {
        assert_eq!(raw("22,80,443"), vec![22, 80, 443]);
    }

    #[test]
    fn test_resolve_range() {
        assert_eq!(raw("8080-8082"), vec![8080, 8081, 8082]);
    }

    #[test]
    fn test_resolve_mixed_keeps_order() {
        assert_eq!(raw("443,8000-8002,22"), vec![443, 8000, 8001, 8002, 22]);
    }

    #[test]
    fn test_resolve_keeps_duplicates() {
        assert_eq!(raw("80,80,79-80"), vec![80, 80, 79, 80]);
    }

    #[test]
    fn test_resolve_drops_out_of_range() {
        assert_eq!(raw("80,70000,443"), vec![80, 443]);
        assert_eq!(raw("0,1,65535,65536"), vec![1, 65535]);
        assert_eq!(raw("99999999999999999999,22"), vec![22]);
    }

    #[test]
    fn test_resolve_drops_inverted_range() {
        assert!(raw("100-50").is_empty());
    }

    #[test]
    fn test_resolve_drops_partially_invalid_range() {
        assert_eq!(raw("65530-65540,21"), vec![21]);
        assert_eq!(raw("0-3"), Vec::<u16>::new());
    }

    #[test]
    fn test_resolve_drops_non_numeric() {
        assert_eq!(raw("abc,80"), vec![80]);
        assert_eq!(raw("8o,80"), vec![80]);
    }

    #[test]
    fn test_resolve_empty() {
        assert!(raw("").is_empty());
        assert!(PortSpec::resolve("").is_empty());
        assert!(PortSpec::resolve("").skipped().is_empty());
    }

    #[test]
    fn test_resolve_degenerate_range_tokens() {
        assert_eq!(raw("-,80-,-80,1-2-3,,25"), vec![25]);
    }

    #[test]
    fn test_resolve_single_port_range() {
        assert_eq!(raw("8080-8080"), vec![8080]);
    }

    #[test]
    fn test_resolve_accepts_leading_plus() {
        assert_eq!(raw("+80, 443,22"), vec![80, 22]);
        assert_eq!(raw("+8000-+8001"), vec![8000, 8001]);
        assert_eq!(raw("+,++80,+-80"), Vec::<u16>::new());
        assert_eq!(raw("+70000"), Vec::<u16>::new());
    }

    #[test]
    fn test_resolve_does_not_trim() {
        assert_eq!(raw(" 80,443"), vec![443]);
    }

    #[test]
    fn test_resolved_ports_in_bounds() {
        let ports = resolve_ports("0-10,65530-65535,100000,7,65536-65537");
        assert!(!ports.is_empty());
        assert!(ports.iter().all(|p| (1..=65535).contains(&p.as_u16())));
    }

    #[test]
    fn test_skipped_reasons() {
        let spec = PortSpec::resolve("abc,70000,100-50,,80");
        assert_eq!(spec.to_ports(), vec![Port::new(80).unwrap()]);

        let reasons: Vec<&PortError> = spec.skipped().iter().map(|s| &s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                &PortError::InvalidFormat("abc".to_string()),
                &PortError::OutOfRange("70000".to_string()),
                &PortError::InvalidRange(100, 50),
                &PortError::Empty,
            ]
        );
        assert_eq!(spec.skipped()[0].token, "abc");
    }

    #[test]
    fn test_spec_display_and_count() {
        let spec = PortSpec::resolve("22,8000-8010,443");
        assert_eq!(spec.to_string(), "22,8000-8010,443");
        assert_eq!(spec.count(), 13);
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("443"));
        assert!(!is_number(""));
        assert!(!is_number("+80"));
        assert!(!is_number("4 3"));
    }
}
