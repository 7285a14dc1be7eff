//! Character-class profiling.
//!
//! Classifies which character classes a candidate password draws from and
//! derives an effective alphabet size: the sum of fixed class sizes
//! (26 lower + 26 upper + 10 digits + 32 specials) for each class present.
//!
//! The size is a per-class approximation, not a count of distinct symbols
//! actually used — "aaaa" and "abcd" both score 26. Downstream entropy and
//! crack-time numbers depend on this exact behavior.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Alphabet size contributed by the lowercase class.
pub const LOWER_SIZE: u32 = 26;
/// Alphabet size contributed by the uppercase class.
pub const UPPER_SIZE: u32 = 26;
/// Alphabet size contributed by the digit class.
pub const DIGIT_SIZE: u32 = 10;
/// Approximate alphabet size contributed by the special class.
pub const SPECIAL_SIZE: u32 = 32;

/// Largest possible effective alphabet size (all four classes present).
pub const MAX_EFFECTIVE_SIZE: u32 = LOWER_SIZE + UPPER_SIZE + DIGIT_SIZE + SPECIAL_SIZE;

/// Which character classes a candidate uses, and the resulting alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CharsetProfile {
    /// Candidate contains at least one `a`-`z`.
    pub has_lower: bool,
    /// Candidate contains at least one `A`-`Z`.
    pub has_upper: bool,
    /// Candidate contains at least one `0`-`9`.
    pub has_digit: bool,
    /// Candidate contains at least one character outside ASCII alphanumerics.
    /// Non-ASCII letters and symbols land here.
    pub has_special: bool,
    /// Sum of fixed class sizes for the classes present. 0 only when the
    /// candidate is empty.
    pub effective_size: u32,
}

impl CharsetProfile {
    /// Number of distinct classes present.
    pub const fn class_count(&self) -> u32 {
        self.has_lower as u32
            + self.has_upper as u32
            + self.has_digit as u32
            + self.has_special as u32
    }
}

/// Profile the character classes used by `candidate`.
///
/// Total over all strings, including the empty string (all-false profile,
/// `effective_size` 0).
#[tracing::instrument(skip(candidate), fields(len = candidate.chars().count()))]
pub fn analyze(candidate: &str) -> CharsetProfile {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in candidate.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }

    let effective_size = LOWER_SIZE * u32::from(has_lower)
        + UPPER_SIZE * u32::from(has_upper)
        + DIGIT_SIZE * u32::from(has_digit)
        + SPECIAL_SIZE * u32::from(has_special);

    CharsetProfile {
        has_lower,
        has_upper,
        has_digit,
        has_special,
        effective_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_all_false() {
        let profile = analyze("");
        assert!(!profile.has_lower);
        assert!(!profile.has_upper);
        assert!(!profile.has_digit);
        assert!(!profile.has_special);
        assert_eq!(profile.effective_size, 0);
    }

    #[test]
    fn single_class_sizes() {
        assert_eq!(analyze("abc").effective_size, 26);
        assert_eq!(analyze("ABC").effective_size, 26);
        assert_eq!(analyze("123").effective_size, 10);
        assert_eq!(analyze("!@#").effective_size, 32);
    }

    #[test]
    fn repeated_digit_still_scores_full_class() {
        // Fixed-class approximation: one distinct symbol, full class size.
        let profile = analyze("7777777");
        assert!(profile.has_digit);
        assert_eq!(profile.effective_size, 10);
    }

    #[test]
    fn all_classes_sum_to_94() {
        let profile = analyze("aA1!");
        assert_eq!(profile.class_count(), 4);
        assert_eq!(profile.effective_size, MAX_EFFECTIVE_SIZE);
        assert_eq!(profile.effective_size, 94);
    }

    #[test]
    fn unicode_counts_as_special() {
        let profile = analyze("héllo");
        assert!(profile.has_lower);
        assert!(profile.has_special);
        assert_eq!(profile.effective_size, 26 + 32);

        let emoji_only = analyze("🔒🔑");
        assert!(emoji_only.has_special);
        assert_eq!(emoji_only.effective_size, 32);
    }

    #[test]
    fn sizes_are_subset_sums() {
        // Every profile lands on a sum of a subset of {26, 26, 10, 32}.
        let valid: [u32; 12] = [0, 10, 26, 32, 36, 42, 52, 58, 62, 68, 84, 94];
        let samples = [
            "", "a", "Z", "5", "-", "aZ", "a5", "a-", "Z5", "Z-", "5-", "aZ5", "aZ-", "a5-",
            "Z5-", "aZ5-",
        ];
        for s in samples {
            let size = analyze(s).effective_size;
            assert!(valid.contains(&size), "unexpected size {size} for {s:?}");
            assert!(size <= MAX_EFFECTIVE_SIZE);
        }
    }
}
