//! Error handling and exit codes.

use ciprobe_core::constants::exit_codes;
use ciprobe_core::CoreError;

/// Every failure that can reach the top-level handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No task was selected.
    #[error("unknown task")]
    UnknownTask,

    /// A numeric component rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A panic escaped task dispatch.
    #[error("internal fault: {0}")]
    Fault(String),
}

/// Map an application error to its process exit code.
#[must_use]
pub fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::UnknownTask => exit_codes::ERROR_USAGE,
        AppError::Core(_) | AppError::Io(_) | AppError::Fault(_) => exit_codes::ERROR_GENERIC,
    }
}
