//! CLI result presenter.

use std::io::{self, Write};

use num_bigint::BigUint;

use crate::env_report::EnvSnapshot;
use crate::output::{format_env_line, format_sequence};

/// Renders task results.
pub trait ResultPresenter {
    /// Print a Fibonacci sequence as a single list line.
    fn present_fibonacci(&mut self, seq: &[BigUint]) -> io::Result<()>;

    /// Print a list of primes as a single list line.
    fn present_primes(&mut self, primes: &[i64]) -> io::Result<()>;

    /// Print one `NAME=value` line per CI variable.
    fn present_env(&mut self, snapshot: &EnvSnapshot) -> io::Result<()>;
}

/// Presenter writing plain text lines to any writer (stdout in the binary).
pub struct CLIResultPresenter<W: Write> {
    out: W,
}

impl<W: Write> CLIResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for CLIResultPresenter<W> {
    fn present_fibonacci(&mut self, seq: &[BigUint]) -> io::Result<()> {
        writeln!(self.out, "{}", format_sequence(seq))?;
        self.out.flush()
    }

    fn present_primes(&mut self, primes: &[i64]) -> io::Result<()> {
        writeln!(self.out, "{}", format_sequence(primes))?;
        self.out.flush()
    }

    fn present_env(&mut self, snapshot: &EnvSnapshot) -> io::Result<()> {
        for (name, value) in snapshot.iter() {
            writeln!(self.out, "{}", format_env_line(name, value))?;
        }
        if snapshot.missing() > 0 {
            tracing::debug!(missing = snapshot.missing(), "some CI variables are unset");
        }
        self.out.flush()
    }
}
