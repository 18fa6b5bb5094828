//! Application configuration from CLI flags and environment.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// ciprobe — tiny workload for exercising a CI pipeline.
#[derive(Parser, Debug)]
#[command(name = "ciprobe", version, about)]
pub struct AppConfig {
    /// Task to run.
    #[command(subcommand)]
    pub task: Option<Task>,

    /// Log verbosity: DEBUG, INFO, WARNING, ERROR or CRITICAL.
    ///
    /// Kept as raw bytes: an unreadable value falls back to INFO instead of
    /// failing the parse.
    #[arg(
        long,
        global = true,
        env = "LOG_LEVEL",
        default_value = "INFO",
        value_parser = clap::value_parser!(OsString)
    )]
    pub log_level: OsString,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// The closed set of tasks.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Generate first n Fibonacci numbers.
    Fib {
        /// How many numbers.
        #[arg(long, allow_negative_numbers = true)]
        n: i64,
    },

    /// List primes up to n.
    Primes {
        /// Upper bound (inclusive).
        #[arg(long, allow_negative_numbers = true)]
        n: i64,
    },

    /// Print a few environment variables useful in CI (e.g., Jenkins, Sonar).
    Env,
}

impl AppConfig {
    /// Parse CLI arguments, exiting with a usage message on error.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse from an explicit argument vector.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
