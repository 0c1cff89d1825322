//! Configuration management for pscan.
//!
//! Provides the scan defaults and where they are read from.

mod settings;

pub use settings::{default_settings_file, Settings, DEFAULT_PORTS, DEFAULT_TIMEOUT_MS};
