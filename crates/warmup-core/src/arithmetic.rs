//! # Arithmetic Problems
//!
//! Sum, century-by-year and the Fibonacci sequence.
//!
//! ## Usage
//! ```rust
//! use warmup_core::arithmetic::{century, fibonacci, sum};
//!
//! assert_eq!(sum(2.0, 3.0), 5.0);
//! assert_eq!(century(1901).unwrap(), 20);
//! assert_eq!(fibonacci(10).unwrap(), 55);
//! ```

use crate::error::{ProblemError, ProblemResult};
use crate::MAX_FIBONACCI_INDEX;

/// Adds two numbers.
///
/// The dispatch layer adds integer operands with [`checked_sum`] instead so
/// large integers do not lose precision.
#[inline]
pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Adds two integers, failing on overflow.
///
/// ## Example
/// ```rust
/// use warmup_core::arithmetic::checked_sum;
///
/// assert_eq!(checked_sum(40, 2).unwrap(), 42);
/// assert!(checked_sum(i64::MAX, 1).is_err());
/// ```
pub fn checked_sum(a: i64, b: i64) -> ProblemResult<i64> {
    a.checked_add(b).ok_or_else(|| ProblemError::Overflow {
        operation: "sum".to_string(),
    })
}

/// Returns the century a year belongs to.
///
/// ## Rules
/// - Century C covers the years `(C-1)*100 + 1 ..= C*100`
/// - Year 0 maps to century 0
/// - Negative years are rejected
///
/// ## Example
/// ```rust
/// use warmup_core::arithmetic::century;
///
/// assert_eq!(century(100).unwrap(), 1);
/// assert_eq!(century(101).unwrap(), 2);
/// assert!(century(-1).is_err());
/// ```
pub fn century(year: i64) -> ProblemResult<i64> {
    if year < 0 {
        return Err(ProblemError::out_of_range("year", "must not be negative"));
    }

    // ceil(year / 100) without going through floats or overflowing
    Ok(year / 100 + i64::from(year % 100 != 0))
}

/// Returns the century of a year with a fractional part.
///
/// Same rules as [`century`]; `1999.5` belongs to century 20.
///
/// ## Example
/// ```rust
/// use warmup_core::arithmetic::fractional_century;
///
/// assert_eq!(fractional_century(1999.5).unwrap(), 20.0);
/// assert_eq!(fractional_century(2000.25).unwrap(), 21.0);
/// assert!(fractional_century(-0.5).is_err());
/// ```
pub fn fractional_century(year: f64) -> ProblemResult<f64> {
    if !year.is_finite() {
        return Err(ProblemError::out_of_range("year", "must be finite"));
    }

    if year < 0.0 {
        return Err(ProblemError::out_of_range("year", "must not be negative"));
    }

    Ok((year / 100.0).ceil())
}

/// Returns the nth Fibonacci number, 1-indexed (F(1) = F(2) = 1).
///
/// ## Rules
/// - `n` must be at least 1
/// - `n` must not exceed [`MAX_FIBONACCI_INDEX`], the last term that fits a `u64`
///
/// ## Example
/// ```rust
/// use warmup_core::arithmetic::fibonacci;
///
/// assert_eq!(fibonacci(1).unwrap(), 1);
/// assert_eq!(fibonacci(2).unwrap(), 1);
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// assert!(fibonacci(0).is_err());
/// ```
pub fn fibonacci(n: i64) -> ProblemResult<u64> {
    if n < 1 {
        return Err(ProblemError::out_of_range(
            "n",
            "must be a positive integer",
        ));
    }

    if n > MAX_FIBONACCI_INDEX {
        return Err(ProblemError::out_of_range(
            "n",
            format!("must be at most {MAX_FIBONACCI_INDEX}"),
        ));
    }

    // (F(k-1), F(k)) starting from k = 1
    let (mut previous, mut current) = (0u64, 1u64);
    for _ in 1..n {
        let next = previous + current;
        previous = current;
        current = next;
    }

    Ok(current)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_sum() {
        assert_eq!(sum(1.0, 2.0), 3.0);
        assert_eq!(sum(-1.5, 0.5), -1.0);
        assert_eq!(checked_sum(-7, 7).unwrap(), 0);
    }

    #[test]
    fn test_checked_sum_overflow() {
        let err = checked_sum(i64::MIN, -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_century() {
        assert_eq!(century(0).unwrap(), 0);
        assert_eq!(century(1).unwrap(), 1);
        assert_eq!(century(100).unwrap(), 1);
        assert_eq!(century(101).unwrap(), 2);
        assert_eq!(century(2000).unwrap(), 20);
        assert_eq!(century(2001).unwrap(), 21);
    }

    #[test]
    fn test_century_largest_year() {
        assert_eq!(century(i64::MAX).unwrap(), 92_233_720_368_547_759);
        assert_eq!(century(i64::MAX - 99).unwrap(), 92_233_720_368_547_758);
    }

    #[test]
    fn test_fractional_century() {
        assert_eq!(fractional_century(1999.5).unwrap(), 20.0);
        assert_eq!(fractional_century(0.5).unwrap(), 1.0);
        assert_eq!(fractional_century(100.0).unwrap(), 1.0);
        assert_eq!(fractional_century(-0.5).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(
            fractional_century(f64::INFINITY).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_century_rejects_negative() {
        let err = century(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_fibonacci() {
        let first: Vec<u64> = (1..=10).map(|n| fibonacci(n).unwrap()).collect();
        assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_fibonacci_largest_index() {
        assert_eq!(fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
        assert_eq!(fibonacci(94).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_fibonacci_rejects_non_positive() {
        assert_eq!(fibonacci(0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(fibonacci(-5).unwrap_err().kind(), ErrorKind::Range);
    }
}
