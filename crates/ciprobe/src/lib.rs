//! ciprobe library — argument parsing, dispatch and bootstrap for the
//! CI smoke-test binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
