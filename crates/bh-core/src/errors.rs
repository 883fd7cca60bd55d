//! Error types for bankholidays.
//!
//! Holiday predicates are total and never fail. Errors only arise when a
//! date is built from bad input or when date arithmetic leaves the supported
//! range.

use thiserror::Error;

/// The top-level error type used throughout bankholidays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid or out-of-range calendar date.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated by the caller.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout bankholidays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bh_core::{ensure, errors::Error};
/// fn week_index(n: u8) -> bh_core::errors::Result<u8> {
///     ensure!((1..=5).contains(&n), "week index must be in 1..=5, got {n}");
///     Ok(n)
/// }
/// assert!(week_index(3).is_ok());
/// assert!(matches!(week_index(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: i32) -> Result<i32> {
        ensure!(n >= 0, "negative input {n}");
        Ok(n)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(checked(4), Ok(4));
    }

    #[test]
    fn ensure_reports_precondition() {
        let err = checked(-1).unwrap_err();
        assert_eq!(err, Error::Precondition("negative input -1".into()));
        assert_eq!(err.to_string(), "precondition not satisfied: negative input -1");
    }

    #[test]
    fn display_messages() {
        assert_eq!(Error::Date("bad".into()).to_string(), "date error: bad");
        assert_eq!(Error::Parse("x".into()).to_string(), "parse error: x");
    }
}
