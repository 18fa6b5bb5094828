//! Fixed names and exit codes shared by the ciprobe crates.

/// CI identity variables echoed by the `env` task, in print order.
pub const CI_ENV_VARS: [&str; 6] = [
    "JENKINS_URL",
    "JOB_NAME",
    "BUILD_NUMBER",
    "GIT_URL",
    "BRANCH_NAME",
    "SONAR_HOST_URL",
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Unhandled fault, including domain errors propagated from a task.
    pub const ERROR_GENERIC: i32 = 1;
    /// Missing or unrecognized task, or malformed arguments.
    pub const ERROR_USAGE: i32 = 2;
}
