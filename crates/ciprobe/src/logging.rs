//! Logging bootstrap.
//!
//! The level comes from an explicit [`LogConfig`] built once at process
//! entry; nothing here reads the environment.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Diagnostic verbosity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
}

impl LogConfig {
    /// Map a severity name to a level, case-insensitively.
    ///
    /// Recognizes DEBUG, INFO, WARNING (or WARN), ERROR and CRITICAL (or
    /// FATAL). Anything else falls back to INFO.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let level = match name.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "WARNING" | "WARN" => Level::WARN,
            "ERROR" | "CRITICAL" | "FATAL" => Level::ERROR,
            _ => Level::INFO,
        };
        Self { level }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// task output; colour is used only when stderr is a terminal.
pub fn init(config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("").add_directive(config.level.into()))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
