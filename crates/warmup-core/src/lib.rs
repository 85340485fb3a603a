//! # warmup-core: Pure Problem Functions
//!
//! Nine small, independent problems as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Warmup Problems Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`warmup` binary)                   │   │
//! │  │    args ──► JSON values ──► evaluate ──► plain / JSON output    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ warmup-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   dispatch ── dynamic arguments, type checks, Problem names     │   │
//! │  │       │                                                         │   │
//! │  │   ┌───┴────────┬──────────┬──────────┬─────────┬───────────┐   │   │
//! │  │   arithmetic   color      matrix     radix     text  tictactoe│   │
//! │  │   sum          hex_to_rgb transpose  to_base   phone  winner  │   │
//! │  │   century                                      smileys  │     │   │
//! │  │   fibonacci               ◄────── columns via transpose ┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`arithmetic`] - Sum, century by year, Fibonacci
//! - [`color`] - Hex color to RGB
//! - [`matrix`] - Shape-checked matrix and transposition
//! - [`radix`] - Number-base conversion
//! - [`text`] - Phone number validation, smiley counting
//! - [`tictactoe`] - Winner of a finished 3x3 game
//! - [`dispatch`] - Call any problem by name with JSON arguments
//! - [`error`] - Error types
//!
//! ## Error Kinds
//!
//! Every failure is a [`ProblemError`] whose [`kind`](ProblemError::kind) is
//! either [`ErrorKind::Type`] (wrong fundamental type) or
//! [`ErrorKind::Range`] (right type, out-of-domain value). The typed functions
//! make most type errors unrepresentable; [`dispatch`] reports them for
//! dynamic input.
//!
//! ## Example Usage
//!
//! ```rust
//! use warmup_core::{count_smileys, hex_to_rgb, to_base, transpose};
//!
//! assert_eq!(hex_to_rgb("#FFF").unwrap().to_string(), "(255, 255, 255)");
//! assert_eq!(to_base(255, 16).unwrap(), "ff");
//! assert_eq!(count_smileys(":-) (-:"), 2);
//! assert_eq!(
//!     transpose(&[vec![1, 2], vec![3, 4]]).unwrap(),
//!     vec![vec![1, 3], vec![2, 4]]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod color;
pub mod dispatch;
pub mod error;
pub mod matrix;
pub mod radix;
pub mod text;
pub mod tictactoe;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use arithmetic::{century, checked_sum, fibonacci, sum};
pub use color::{hex_to_rgb, Rgb};
pub use dispatch::{evaluate, Problem};
pub use error::{ErrorKind, ProblemError, ProblemResult};
pub use matrix::{transpose, Matrix};
pub use radix::to_base;
pub use text::{count_smileys, is_valid_phone};
pub use tictactoe::{winner, Field, GameResult, Symbol};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest radix accepted by [`to_base`].
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by [`to_base`] (digits 0-9 then a-z).
pub const MAX_RADIX: u32 = 36;

/// Largest Fibonacci index whose term fits a `u64`.
///
/// F(93) = 12,200,160,415,121,876,738; F(94) overflows.
pub const MAX_FIBONACCI_INDEX: i64 = 93;
