//! # Dispatch Layer
//!
//! Calls a problem by name with dynamically typed `serde_json::Value`
//! arguments. This is where [`ErrorKind::Type`](crate::ErrorKind::Type)
//! failures come from: the typed functions cannot receive a string where a
//! number belongs, but JSON arguments can.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate(problem, args)                                               │
//! │       │                                                                 │
//! │       ├── wrong argument count?       → ArityMismatch   (type)         │
//! │       │                                                                 │
//! │       ├── any argument wrong type?    → TypeMismatch    (type)         │
//! │       │                                 NotAMatrix      (type)         │
//! │       │                                                                 │
//! │       ├── integer argument has        → OutOfRange      (range)        │
//! │       │   a fractional part?                                           │
//! │       │                                                                 │
//! │       └── typed function              → Value / range errors           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every argument is type-checked before any argument is range-checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ProblemError, ProblemResult};
use crate::matrix::Matrix;
use crate::tictactoe::{Field, Symbol};
use crate::{arithmetic, color, radix, text, tictactoe, MAX_RADIX, MIN_RADIX};

// =============================================================================
// Problem
// =============================================================================

/// The problems callable through [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Problem {
    Sum,
    Century,
    HexToRgb,
    Fibonacci,
    Transpose,
    ToBase,
    Phone,
    Smileys,
    TicTacToe,
}

impl Problem {
    pub const ALL: [Problem; 9] = [
        Problem::Sum,
        Problem::Century,
        Problem::HexToRgb,
        Problem::Fibonacci,
        Problem::Transpose,
        Problem::ToBase,
        Problem::Phone,
        Problem::Smileys,
        Problem::TicTacToe,
    ];

    /// Name used on the command line and in JSON.
    pub const fn name(&self) -> &'static str {
        match self {
            Problem::Sum => "sum",
            Problem::Century => "century",
            Problem::HexToRgb => "hex-to-rgb",
            Problem::Fibonacci => "fibonacci",
            Problem::Transpose => "transpose",
            Problem::ToBase => "to-base",
            Problem::Phone => "phone",
            Problem::Smileys => "smileys",
            Problem::TicTacToe => "tic-tac-toe",
        }
    }

    /// Number of arguments the problem takes.
    pub const fn arity(&self) -> usize {
        match self {
            Problem::Sum | Problem::ToBase => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::ALL
            .into_iter()
            .find(|problem| problem.name() == s)
            .ok_or_else(|| ProblemError::InvalidFormat {
                argument: "problem".to_string(),
                reason: format!("unknown problem '{s}'"),
            })
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates `problem` with dynamically typed arguments.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use warmup_core::{evaluate, ErrorKind, Problem};
///
/// assert_eq!(evaluate(Problem::Sum, &[json!(1), json!(2)]).unwrap(), json!(3));
///
/// let err = evaluate(Problem::Sum, &[json!(1), json!("x")]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
pub fn evaluate(problem: Problem, args: &[Value]) -> ProblemResult<Value> {
    debug!(problem = %problem, argc = args.len(), "Evaluating problem");

    let result = check_arity(problem, args).and_then(|()| dispatch(problem, args));

    if let Err(err) = &result {
        debug!(problem = %problem, kind = %err.kind(), error = %err, "Problem rejected arguments");
    }

    result
}

fn check_arity(problem: Problem, args: &[Value]) -> ProblemResult<()> {
    if args.len() != problem.arity() {
        return Err(ProblemError::ArityMismatch {
            problem: problem.name().to_string(),
            expected: problem.arity(),
            actual: args.len(),
        });
    }
    Ok(())
}

fn dispatch(problem: Problem, args: &[Value]) -> ProblemResult<Value> {
    match problem {
        Problem::Sum => {
            let a = number(&args[0], "a")?;
            let b = number(&args[1], "b")?;
            sum(a, b)
        }
        Problem::Century => century(number(&args[0], "year")?),
        Problem::HexToRgb => {
            let hex = string(&args[0], "hex color")?;
            Ok(Value::String(color::hex_to_rgb(hex)?.to_string()))
        }
        Problem::Fibonacci => {
            let n = whole(number(&args[0], "n")?, "n")?;
            Ok(Value::from(arithmetic::fibonacci(n)?))
        }
        Problem::Transpose => {
            let rows = matrix(&args[0])?;
            Ok(Value::Array(
                rows.transpose()
                    .into_rows()
                    .into_iter()
                    .map(Value::Array)
                    .collect(),
            ))
        }
        Problem::ToBase => {
            let n = number(&args[0], "n")?;
            let base = number(&args[1], "base")?;
            let n = whole(n, "n")?;
            let base = whole(base, "base")?;
            let base = u32::try_from(base).map_err(|_| {
                ProblemError::out_of_range(
                    "base",
                    format!("must be between {MIN_RADIX} and {MAX_RADIX}"),
                )
            })?;
            Ok(Value::String(radix::to_base(n, base)?))
        }
        Problem::Phone => {
            let phone = string(&args[0], "phone")?;
            Ok(Value::Bool(text::is_valid_phone(phone)))
        }
        Problem::Smileys => {
            let input = string(&args[0], "text")?;
            Ok(Value::from(text::count_smileys(input)))
        }
        Problem::TicTacToe => {
            let board = field(&args[0])?;
            Ok(Value::String(tictactoe::winner(&board).to_string()))
        }
    }
}

// =============================================================================
// Argument Conversion
// =============================================================================

fn number<'a>(value: &'a Value, argument: &str) -> ProblemResult<&'a Number> {
    match value {
        Value::Number(number) => Ok(number),
        _ => Err(ProblemError::type_mismatch(argument, "a number")),
    }
}

fn string<'a>(value: &'a Value, argument: &str) -> ProblemResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ProblemError::type_mismatch(argument, "a string"))
}

/// Reads a number that must hold an integer value (`5` or `5.0`).
fn whole(number: &Number, argument: &str) -> ProblemResult<i64> {
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }

    let too_large = || ProblemError::out_of_range(argument, "does not fit a 64-bit integer");

    if number.is_u64() {
        return Err(too_large());
    }

    let float = number.as_f64().unwrap_or(f64::NAN);
    if float.fract() != 0.0 || !float.is_finite() {
        return Err(ProblemError::out_of_range(argument, "must be an integer"));
    }

    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63
    if float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return Err(too_large());
    }

    Ok(float as i64)
}

/// Integer years stay exact; fractional years round up to the next century.
fn century(year: &Number) -> ProblemResult<Value> {
    if let Some(year) = year.as_i64() {
        return Ok(Value::from(arithmetic::century(year)?));
    }

    if let Some(year) = year.as_u64() {
        return Ok(Value::from(year / 100 + u64::from(year % 100 != 0)));
    }

    let year = year.as_f64().unwrap_or(f64::NAN);
    let century = arithmetic::fractional_century(year)?;
    if century < i64::MAX as f64 {
        return Ok(Value::from(century as i64));
    }

    Number::from_f64(century)
        .map(Value::Number)
        .ok_or_else(|| ProblemError::out_of_range("year", "must be finite"))
}

/// Integer operands keep integer precision; anything else adds as floats.
fn sum(a: &Number, b: &Number) -> ProblemResult<Value> {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return Ok(Value::from(arithmetic::checked_sum(a, b)?));
    }

    let total = arithmetic::sum(
        a.as_f64().unwrap_or(f64::NAN),
        b.as_f64().unwrap_or(f64::NAN),
    );
    Number::from_f64(total)
        .map(Value::Number)
        .ok_or_else(|| ProblemError::Overflow {
            operation: "sum".to_string(),
        })
}

fn matrix(value: &Value) -> ProblemResult<Matrix<Value>> {
    let rows = value.as_array().ok_or_else(|| ProblemError::NotAMatrix {
        reason: "expected an array of rows".to_string(),
    })?;

    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.as_array().cloned().ok_or_else(|| ProblemError::NotAMatrix {
                reason: format!("row {index} is not an array"),
            })
        })
        .collect::<ProblemResult<Vec<_>>>()?;

    Matrix::try_from(rows)
}

/// Type-checks the whole field before checking its shape and marks.
fn field(value: &Value) -> ProblemResult<Field> {
    let expected = "an array of rows of strings";
    let rows = value
        .as_array()
        .ok_or_else(|| ProblemError::type_mismatch("field", expected))?;

    let rows = rows
        .iter()
        .map(|row| {
            row.as_array()
                .ok_or_else(|| ProblemError::type_mismatch("field", expected))?
                .iter()
                .map(|cell| string(cell, "field cell"))
                .collect::<ProblemResult<Vec<&str>>>()
        })
        .collect::<ProblemResult<Vec<_>>>()?;

    if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
        return Err(ProblemError::out_of_range("field", "must be 3x3"));
    }

    let mut board = [[Symbol::X; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        for (c, mark) in row.iter().enumerate() {
            board[r][c] = Symbol::from_mark(mark).ok_or_else(|| ProblemError::InvalidFormat {
                argument: "field cell".to_string(),
                reason: format!("expected 'x' or 'o', got '{mark}'"),
            })?;
        }
    }

    Ok(board)
}

// =============================================================================
// Unit Tests
// =============================================================================
