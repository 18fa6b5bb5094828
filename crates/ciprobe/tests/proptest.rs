//! Property-based tests for task dispatch.

use proptest::prelude::*;

use ciprobe_cli::presenter::CLIResultPresenter;
use ciprobe_lib::app::run_task;
use ciprobe_lib::config::Task;
use ciprobe_lib::errors::{exit_code, AppError};

fn render(task: &Task) -> anyhow::Result<String> {
    let mut presenter = CLIResultPresenter::new(Vec::new());
    run_task(task, &mut presenter)?;
    Ok(String::from_utf8(presenter.into_inner())?)
}

fn parse_list(line: &str) -> Vec<String> {
    let inner = line
        .trim_end()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .expect("bracketed list");
    if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(", ").map(str::to_string).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// `fib` prints exactly n comma-separated terms on one line.
    #[test]
    fn fib_prints_n_terms(n in 0i64..300) {
        let out = render(&Task::Fib { n }).unwrap();
        prop_assert_eq!(out.lines().count(), 1);
        prop_assert_eq!(parse_list(&out).len() as u64, n.unsigned_abs());
    }

    /// `fib` with a negative count fails with the generic exit code.
    #[test]
    fn fib_negative_maps_to_generic_exit(n in -10_000i64..0) {
        let mut presenter = CLIResultPresenter::new(Vec::new());
        let err = run_task(&Task::Fib { n }, &mut presenter).unwrap_err();
        prop_assert!(matches!(err, AppError::Core(_)));
        prop_assert_eq!(exit_code(&err), 1);
        prop_assert!(presenter.into_inner().is_empty());
    }

    /// `primes` output is ascending and bounded by n.
    #[test]
    fn primes_output_is_ascending_and_bounded(n in -10i64..3000) {
        let out = render(&Task::Primes { n }).unwrap();
        let values: Vec<i64> = parse_list(&out).iter().map(|s| s.parse().unwrap()).collect();
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(values.iter().all(|&p| p >= 2 && p <= n));
    }

    /// Same input, same output.
    #[test]
    fn dispatch_is_idempotent(n in 0i64..200) {
        prop_assert_eq!(render(&Task::Fib { n }).unwrap(), render(&Task::Fib { n }).unwrap());
        prop_assert_eq!(render(&Task::Primes { n }).unwrap(), render(&Task::Primes { n }).unwrap());
    }
}
