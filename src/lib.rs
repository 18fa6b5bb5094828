//! Workspace-level test package for ciprobe. See `tests/golden.rs`.
