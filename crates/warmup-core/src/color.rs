//! # Color Conversion
//!
//! Converts hex colors (`#RGB` or `#RRGGBB`) into an [`Rgb`] triple.
//!
//! ## Short Form Expansion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "#F80"     →  digits F, 8, 0   →  FF, 88, 00   →  (255, 136, 0)        │
//! │  "#FF8800"  →  pairs FF, 88, 00                 →  (255, 136, 0)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ProblemError, ProblemResult};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("hex color pattern compiles")
});

// =============================================================================
// Rgb
// =============================================================================

/// A color as three 8-bit channels.
///
/// Displays as `(R, G, B)` with decimal channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Parses a hex color in `#RGB` or `#RRGGBB` form.
///
/// Hex digits are case-insensitive. In the short form every digit is doubled,
/// so `#FFF` is white, not a two-digit slice.
///
/// ## Example
/// ```rust
/// use warmup_core::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#FFFFFF").unwrap().to_string(), "(255, 255, 255)");
/// assert_eq!(hex_to_rgb("#000").unwrap(), Rgb::new(0, 0, 0));
/// assert!(hex_to_rgb("bad").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> ProblemResult<Rgb> {
    if !HEX_COLOR.is_match(hex) {
        return Err(ProblemError::InvalidFormat {
            argument: "hex color".to_string(),
            reason: "expected '#' followed by 3 or 6 hex digits".to_string(),
        });
    }

    let digits = &hex[1..];
    let channels: Vec<u8> = if digits.len() == 3 {
        digits
            .chars()
            .map(|d| parse_channel(&format!("{d}{d}")))
            .collect::<ProblemResult<_>>()?
    } else {
        (0..3)
            .map(|i| parse_channel(&digits[i * 2..i * 2 + 2]))
            .collect::<ProblemResult<_>>()?
    };

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

fn parse_channel(pair: &str) -> ProblemResult<u8> {
    u8::from_str_radix(pair, 16).map_err(|e| ProblemError::InvalidFormat {
        argument: "hex color".to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
