//! Diagnostic logging on stderr.

use console::{Style, StyledObject};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// How chatty diagnostics on stderr should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl LogLevel {
    /// Derive the level from `--quiet` and the number of `-v` flags.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "pscan=error",
            Self::Normal => "pscan=warn",
            Self::Verbose => "pscan=debug",
            Self::Trace => "pscan=trace",
        }
    }
}

/// Prefixes each event with a short styled level marker.
pub struct StatusFormatter;

impl StatusFormatter {
    fn marker(level: &Level) -> StyledObject<&'static str> {
        let (symbol, style) = match *level {
            Level::TRACE => ("[ ]", Style::new().dim()),
            Level::DEBUG => ("[?]", Style::new().blue()),
            Level::INFO => ("[+]", Style::new().green().bold()),
            Level::WARN => ("[*]", Style::new().yellow().bold()),
            Level::ERROR => ("[-]", Style::new().red().bold()),
        };
        style.for_stderr().apply_to(symbol)
    }
}

impl<S, N> FormatEvent<S, N> for StatusFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", Self::marker(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. The filter comes from the command line only.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.directive()))
        .with_writer(std::io::stderr)
        .event_format(StatusFormatter)
        .finish();

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
