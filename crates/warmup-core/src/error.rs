//! # Error Types
//!
//! Error types shared by every problem function.
//!
//! ## Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Kinds                                     │
//! │                                                                         │
//! │  ErrorKind::Type   - argument has the wrong fundamental type           │
//! │  ├── TypeMismatch      (string where a number was expected)            │
//! │  ├── ArityMismatch     (wrong number of arguments)                     │
//! │  └── NotAMatrix        (empty or ragged rows)                          │
//! │                                                                         │
//! │  ErrorKind::Range  - right type, value outside the domain              │
//! │  ├── OutOfRange        (negative year, radix 37, index 0)              │
//! │  ├── InvalidFormat     (hex color that fails the pattern)              │
//! │  └── Overflow          (result does not fit the output type)           │
//! │                                                                         │
//! │  Flow: typed fn / dispatch → ProblemError → CliError → stderr/JSON      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Type is always checked before range, so an argument that is both the
//! wrong type and out of range reports `ErrorKind::Type`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse category of a [`ProblemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ErrorKind {
    /// Argument has the wrong fundamental type.
    Type,
    /// Argument has the right type but an out-of-domain value.
    Range,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Range => write!(f, "range"),
        }
    }
}

// =============================================================================
// Problem Error
// =============================================================================

/// Errors returned by the problem functions and the dispatch layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    /// Argument is not of the expected type.
    ///
    /// ## When This Occurs
    /// - `sum(1, "x")` through the dispatch layer
    /// - A non-string passed where a phone number is expected
    #[error("{argument} must be {expected}")]
    TypeMismatch { argument: String, expected: String },

    /// Wrong number of arguments for a problem.
    #[error("{problem} takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        problem: String,
        expected: usize,
        actual: usize,
    },

    /// Value is not a genuine two-dimensional structure.
    #[error("not a matrix: {reason}")]
    NotAMatrix { reason: String },

    /// Numeric value is outside the allowed domain.
    #[error("{argument} is out of range: {reason}")]
    OutOfRange { argument: String, reason: String },

    /// String value does not match the required format.
    #[error("{argument} has invalid format: {reason}")]
    InvalidFormat { argument: String, reason: String },

    /// Result does not fit the output type.
    #[error("{operation} overflowed")]
    Overflow { operation: String },
}

impl ProblemError {
    /// Returns the coarse category of this error.
    ///
    /// ## Example
    /// ```rust
    /// use warmup_core::{century, ErrorKind};
    ///
    /// let err = century(-1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProblemError::TypeMismatch { .. }
            | ProblemError::ArityMismatch { .. }
            | ProblemError::NotAMatrix { .. } => ErrorKind::Type,
            ProblemError::OutOfRange { .. }
            | ProblemError::InvalidFormat { .. }
            | ProblemError::Overflow { .. } => ErrorKind::Range,
        }
    }

    pub(crate) fn type_mismatch(argument: &str, expected: &str) -> Self {
        ProblemError::TypeMismatch {
            argument: argument.to_string(),
            expected: expected.to_string(),
        }
    }

    pub(crate) fn out_of_range(argument: &str, reason: impl Into<String>) -> Self {
        ProblemError::OutOfRange {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ProblemError.
pub type ProblemResult<T> = Result<T, ProblemError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProblemError::ArityMismatch {
            problem: "sum".to_string(),
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "sum takes 2 argument(s), got 1");

        let err = ProblemError::out_of_range("year", "must not be negative");
        assert_eq!(err.to_string(), "year is out of range: must not be negative");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ProblemError::type_mismatch("a", "a number").kind(),
            ErrorKind::Type
        );
        assert_eq!(
            ProblemError::NotAMatrix {
                reason: "ragged".to_string()
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(
            ProblemError::Overflow {
                operation: "sum".to_string()
            }
            .kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_error_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ErrorKind::Type).unwrap(), "\"type\"");
        assert_eq!(ErrorKind::Range.to_string(), "range");
    }
}
