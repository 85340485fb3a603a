//! Number-base conversion.

use crate::error::{ProblemError, ProblemResult};
use crate::{MAX_RADIX, MIN_RADIX};

/// Writes `n` in the given radix.
///
/// Digits past 9 are lowercase letters; negative numbers get a leading `-`.
///
/// ## Example
/// ```rust
/// use warmup_core::radix::to_base;
///
/// assert_eq!(to_base(255, 16).unwrap(), "ff");
/// assert_eq!(to_base(-5, 2).unwrap(), "-101");
/// assert!(to_base(5, 37).is_err());
/// ```
pub fn to_base(n: i64, base: u32) -> ProblemResult<String> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(ProblemError::out_of_range(
            "base",
            format!("must be between {MIN_RADIX} and {MAX_RADIX}"),
        ));
    }

    let mut magnitude = n.unsigned_abs();
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let radix = u64::from(base);
    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % radix) as u32;
        // digit < base <= 36, so from_digit always succeeds
        digits.extend(char::from_digit(digit, base));
        magnitude /= radix;
    }

    if n < 0 {
        digits.push('-');
    }

    Ok(digits.into_iter().rev().collect())
}
