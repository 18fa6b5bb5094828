//! Domain errors raised by the numeric components.

/// Error type for the sequence and prime components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied a semantically invalid value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result does not fit in memory.
    #[error("cannot allocate {0} terms")]
    CapacityExceeded(i64),
}
