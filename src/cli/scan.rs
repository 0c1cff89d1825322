//! Scan execution for the command line.
//!
//! Turns parsed arguments plus settings into a validated
//! `(host, timeout, port specification)` request and runs it.

use crate::cli::Args;
use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::scanner::{execute_scan, TcpConnectScanner};
use crate::types::{PortSpec, ScanTarget};
use std::io::{self, Write};
use tracing::debug;

/// A validated scan, ready to run.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub target: ScanTarget,
    pub ports: PortSpec,
    /// Report dropped port tokens on stderr.
    pub warn_skipped: bool,
}

impl ScanRequest {
    /// Build a request from arguments and the settings file they point at.
    ///
    /// A missing host is reported before settings are read.
    pub fn load(args: &Args) -> CliResult<Self> {
        if args.host.is_none() {
            return Err(CliError::MissingHost);
        }
        let settings = Settings::load(args.config.as_deref())?;
        Self::from_args(args, &settings)
    }

    /// Build a request from arguments, falling back to `settings` for
    /// anything not given on the command line.
    pub fn from_args(args: &Args, settings: &Settings) -> CliResult<Self> {
        let host = args.host.as_deref().ok_or(CliError::MissingHost)?;
        let timeout_ms = args.timeout.unwrap_or(settings.default_timeout_ms);
        let spec = args.ports.as_deref().unwrap_or(&settings.default_ports);

        let target = ScanTarget::parse(host, timeout_ms)?;
        let ports = PortSpec::resolve(spec);
        debug!(
            host = %target.ip,
            timeout_ms,
            ports = %ports,
            count = ports.count(),
            "scan request"
        );

        Ok(Self {
            target,
            ports,
            warn_skipped: args.warn_skipped,
        })
    }

    /// Probe every resolved port, writing status lines to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let skipped = self.ports.skipped();
        if !skipped.is_empty() {
            if self.warn_skipped {
                output::print_skipped(skipped);
            } else {
                debug!(count = skipped.len(), "port tokens ignored");
            }
        }

        let scanner = TcpConnectScanner::from(self.target);
        execute_scan(&scanner, &self.ports.to_ports(), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::net::{Ipv4Addr, TcpListener};
    use std::time::Duration;

    fn request(argv: &[&str]) -> CliResult<ScanRequest> {
        let args = Args::try_parse_from(argv).unwrap();
        ScanRequest::from_args(&args, &Settings::default())
    }

    #[test]
    fn test_missing_host() {
        assert!(matches!(request(&["pscan"]), Err(CliError::MissingHost)));
    }

    #[test]
    fn test_missing_host_reported_before_settings() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("settings.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let bad = bad.to_str().unwrap();

        let args = Args::try_parse_from(["pscan", "--config", bad]).unwrap();
        assert!(matches!(ScanRequest::load(&args), Err(CliError::MissingHost)));

        let args = Args::try_parse_from(["pscan", "-h", "127.0.0.1", "--config", bad]).unwrap();
        assert!(matches!(ScanRequest::load(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"default_ports": "8080-8081"}"#).unwrap();

        let argv = ["pscan", "-h", "127.0.0.1", "--config", path.to_str().unwrap()];
        let req = ScanRequest::load(&Args::try_parse_from(argv).unwrap()).unwrap();
        assert_eq!(req.ports.to_string(), "8080-8081");
        assert_eq!(req.target.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_host() {
        assert!(matches!(
            request(&["pscan", "-h", "localhost"]),
            Err(CliError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_defaults_apply() {
        let req = request(&["pscan", "-h", "127.0.0.1"]).unwrap();
        assert_eq!(req.target.ip, Ipv4Addr::LOCALHOST);
        assert_eq!(req.target.timeout, Duration::from_millis(500));
        assert_eq!(req.ports.to_string(), "22,80,443");
    }

    #[test]
    fn test_settings_defaults_are_overridden_by_flags() {
        let settings = Settings {
            default_timeout_ms: 900,
            default_ports: "8080".to_string(),
        };

        let args = Args::try_parse_from(["pscan", "-h", "10.1.2.3"]).unwrap();
        let req = ScanRequest::from_args(&args, &settings).unwrap();
        assert_eq!(req.target.timeout, Duration::from_millis(900));
        assert_eq!(req.ports.to_string(), "8080");

        let args = Args::try_parse_from(["pscan", "-h", "10.1.2.3", "-t", "50", "-p", "1-3"])
            .unwrap();
        let req = ScanRequest::from_args(&args, &settings).unwrap();
        assert_eq!(req.target.timeout, Duration::from_millis(50));
        assert_eq!(req.ports.to_string(), "1-3");
    }

    #[test]
    fn test_malformed_spec_prints_nothing() {
        let req = request(&["pscan", "-h", "127.0.0.1", "-p", "abc,100-50,70000"]).unwrap();
        let mut out = Vec::new();
        req.execute(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(req.ports.skipped().len(), 3);
    }

    #[test]
    fn test_execute_against_localhost() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let open = listener.local_addr().unwrap().port();
        let spec = format!("{},{}", open, open);

        let argv = ["pscan", "-h", "127.0.0.1", "-t", "1000", "-p", spec.as_str()];
        let req = request(&argv).unwrap();
        let mut out = Vec::new();
        req.execute(&mut out).unwrap();

        let expected = format!("Port {0} is open\nPort {0} is open\n", open);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
