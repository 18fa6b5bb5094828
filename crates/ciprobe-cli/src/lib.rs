//! # ciprobe-cli
//!
//! CLI output formatting, the CI environment report, and shell completion.

pub mod completion;
pub mod env_report;
pub mod output;
pub mod presenter;

pub use env_report::EnvSnapshot;
pub use presenter::{CLIResultPresenter, ResultPresenter};
