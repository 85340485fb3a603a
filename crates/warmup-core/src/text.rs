//! # Text Problems
//!
//! Phone number validation and smiley counting.

use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode digits
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^8-800-[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("phone pattern compiles")
});

/// Smiley glyphs counted by [`count_smileys`].
pub const SMILEYS: [&str; 2] = [":-)", "(-:"];

/// Checks that a phone number is exactly `8-800-DDD-DD-DD`.
///
/// ## Example
/// ```rust
/// use warmup_core::text::is_valid_phone;
///
/// assert!(is_valid_phone("8-800-555-35-35"));
/// assert!(!is_valid_phone("8-800-555-3-35"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_NUMBER.is_match(phone)
}

/// Counts `:-)` and `(-:` occurrences in `text`.
///
/// Each glyph is counted separately (non-overlapping), then the two counts
/// are summed, so `"(-:-)"` counts as two.
///
/// ## Example
/// ```rust
/// use warmup_core::text::count_smileys;
///
/// assert_eq!(count_smileys(":-) :-)"), 2);
/// assert_eq!(count_smileys("(-:"), 1);
/// assert_eq!(count_smileys(""), 0);
/// ```
pub fn count_smileys(text: &str) -> usize {
    SMILEYS.iter().map(|smiley| text.matches(smiley).count()).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
