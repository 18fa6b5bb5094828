//! Snapshot of the CI identity variables printed by the `env` task.

use ciprobe_core::CI_ENV_VARS;

/// Ordered `(name, value)` pairs for [`CI_ENV_VARS`].
///
/// Unset variables are recorded with an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    entries: Vec<(&'static str, String)>,
}

impl EnvSnapshot {
    /// Read the CI variables from the process environment.
    ///
    /// Values that are unset or not valid UTF-8 are reported as empty.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a snapshot from an arbitrary lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let entries = CI_ENV_VARS
            .iter()
            .map(|&name| (name, lookup(name).unwrap_or_default()))
            .collect();
        Self { entries }
    }

    /// Iterate over the entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of unset (empty) variables.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_empty()).count()
    }
}
