//! CLI output formatting.

use std::fmt::{Display, Write as _};

/// Format a sequence as a bracketed, comma-space-separated list.
///
/// `[0, 1, 1, 2, 3]` for a populated slice, `[]` for an empty one.
#[must_use]
pub fn format_sequence<T: Display>(values: &[T]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }
    out.push(']');
    out
}

/// Format one `NAME=value` line of the environment report.
#[must_use]
pub fn format_env_line(name: &str, value: &str) -> String {
    format!("{name}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn format_sequence_empty() {
        let empty: [u64; 0] = [];
        assert_eq!(format_sequence(&empty), "[]");
    }

    #[test]
    fn format_sequence_single() {
        assert_eq!(format_sequence(&[0u64]), "[0]");
    }

    #[test]
    fn format_sequence_many() {
        assert_eq!(format_sequence(&[2i64, 3, 5, 7]), "[2, 3, 5, 7]");
    }

    #[test]
    fn format_sequence_biguint() {
        let values = vec![BigUint::from(0u32), BigUint::from(1u32), BigUint::from(1u32)];
        assert_eq!(format_sequence(&values), "[0, 1, 1]");
    }

    #[test]
    fn format_env_line_empty_value() {
        assert_eq!(format_env_line("JOB_NAME", ""), "JOB_NAME=");
        assert_eq!(format_env_line("BUILD_NUMBER", "42"), "BUILD_NUMBER=42");
    }
}
