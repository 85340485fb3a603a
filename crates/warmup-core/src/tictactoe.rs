//! # Tic-Tac-Toe Winner
//!
//! Decides the result of a finished 3x3 game.
//!
//! ## Line Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  For X, then O:                                                         │
//! │                                                                         │
//! │    rows       ──► any row of three?                                     │
//! │    columns    ──► any row of three in the TRANSPOSED field?             │
//! │    diagonals  ──► [0][0] [1][1] [2][2]  or  [0][2] [1][1] [2][0]        │
//! │                                                                         │
//! │  First symbol with a complete line wins; otherwise Draw.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A legal finished game has at most one winner, so the X-before-O order only
//! matters for boards that could not come out of real play.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::matrix::Matrix;

/// A mark on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// Parses `"x"` or `"o"`.
    pub fn from_mark(mark: &str) -> Option<Symbol> {
        match mark {
            "x" => Some(Symbol::X),
            "o" => Some(Symbol::O),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "x"),
            Symbol::O => write!(f, "o"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameResult {
    X,
    O,
    Draw,
}

impl From<Symbol> for GameResult {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameResult::X,
            Symbol::O => GameResult::O,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::X => write!(f, "x"),
            GameResult::O => write!(f, "o"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// A full 3x3 game field, row by row.
pub type Field = [[Symbol; 3]; 3];

/// Returns the winner of a finished game, or [`GameResult::Draw`].
///
/// ## Example
/// ```rust
/// use warmup_core::tictactoe::{winner, GameResult, Symbol::{O, X}};
///
/// let field = [[X, X, X], [O, O, X], [X, O, O]];
/// assert_eq!(winner(&field), GameResult::X);
///
/// let field = [[X, O, X], [X, O, O], [O, X, X]];
/// assert_eq!(winner(&field), GameResult::Draw);
/// ```
pub fn winner(field: &Field) -> GameResult {
    let rows = Matrix::from(*field);
    let columns = rows.transpose();

    let diagonals = [
        [field[0][0], field[1][1], field[2][2]],
        [field[0][2], field[1][1], field[2][0]],
    ];

    Symbol::ALL
        .into_iter()
        .find(|&symbol| {
            rows.rows().iter().any(|row| is_line_of(row, symbol))
                || columns.rows().iter().any(|column| is_line_of(column, symbol))
                || diagonals.iter().any(|diagonal| is_line_of(diagonal, symbol))
        })
        .map_or(GameResult::Draw, GameResult::from)
}

fn is_line_of(line: &[Symbol], symbol: Symbol) -> bool {
    line.iter().all(|&cell| cell == symbol)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::Symbol::{O, X};
    use super::*;

    #[test]
    fn test_row_win() {
        assert_eq!(winner(&[[X, X, X], [O, O, X], [X, O, O]]), GameResult::X);
        assert_eq!(winner(&[[X, O, X], [O, O, O], [X, X, O]]), GameResult::O);
    }

    #[test]
    fn test_column_win() {
        assert_eq!(winner(&[[O, X, X], [O, X, O], [O, O, X]]), GameResult::O);
        assert_eq!(winner(&[[O, X, X], [X, O, X], [O, O, X]]), GameResult::X);
    }

    #[test]
    fn test_diagonal_win() {
        assert_eq!(winner(&[[O, X, X], [X, O, X], [X, O, O]]), GameResult::O);
        assert_eq!(winner(&[[O, O, X], [O, X, O], [X, X, O]]), GameResult::X);
    }

    #[test]
    fn test_draw() {
        assert_eq!(winner(&[[X, O, X], [X, O, O], [O, X, X]]), GameResult::Draw);
    }

    #[test]
    fn test_result_serialization() {
        assert_eq!(serde_json::to_string(&GameResult::Draw).unwrap(), "\"draw\"");
        assert_eq!(GameResult::from(O).to_string(), "o");
        assert_eq!(Symbol::from_mark("x"), Some(X));
        assert_eq!(Symbol::from_mark("X"), None);
    }
}
