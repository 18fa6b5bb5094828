//! Application entry point and dispatch.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use ciprobe_cli::completion::generate_completion;
use ciprobe_cli::env_report::EnvSnapshot;
use ciprobe_cli::presenter::{CLIResultPresenter, ResultPresenter};
use ciprobe_core::generator::SequenceGenerator;
use ciprobe_core::generator_iterative::IterativeGenerator;
use ciprobe_core::primes::primes_up_to;

use crate::config::{AppConfig, Task};
use crate::errors::AppError;

/// Run the application, writing task output to `out`.
///
/// Domain errors are not handled here; they propagate to the caller.
pub fn run<W: Write>(config: &AppConfig, mut out: W) -> Result<(), AppError> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut out);
        return Ok(());
    }

    let Some(task) = &config.task else {
        return Err(AppError::UnknownTask);
    };

    run_task(task, &mut CLIResultPresenter::new(out))
}

/// Run `f`, turning a panic into [`AppError::Fault`] so it maps to the
/// generic exit code instead of the runtime's panic status.
pub fn catch_faults<F>(f: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<(), AppError>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(AppError::Fault(msg))
    })
}

/// Dispatch a single task to its component and present the result.
pub fn run_task(task: &Task, presenter: &mut dyn ResultPresenter) -> Result<(), AppError> {
    match *task {
        Task::Fib { n } => {
            tracing::info!("Generating Fibonacci sequence...");
            let generator = IterativeGenerator::new();
            let seq = generator.generate(n)?;
            tracing::debug!(n, terms = seq.len(), generator = generator.name(), "sequence ready");
            presenter.present_fibonacci(&seq)?;
        }
        Task::Primes { n } => {
            tracing::info!("Listing primes up to n...");
            let primes = primes_up_to(n);
            tracing::debug!(n, count = primes.len(), "primes ready");
            presenter.present_primes(&primes)?;
        }
        Task::Env => {
            let snapshot = EnvSnapshot::capture();
            presenter.present_env(&snapshot)?;
        }
    }
    Ok(())
}
