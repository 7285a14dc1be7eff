//! Known-weak password list.
//!
//! A small illustrative dictionary, not a breach database. Membership is
//! checked on the lowercased candidate, so "PASSWORD" and "Password" hit
//! the same entry.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Built-in known-weak passwords.
pub static COMMON_PASSWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "password", "123456", "qwerty", "letmein", "welcome", "admin", "iloveyou", "12345678",
    ]
    .into_iter()
    .collect()
});

/// The built-in weak-password list plus caller-supplied extras.
///
/// Extras are normalized to lowercase when added so lookup stays a single
/// lowercase membership test.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    extra: HashSet<String>,
}

impl Dictionary {
    /// Dictionary with only the built-in entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary extended with `words` (lowercased, blanks skipped).
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        dict.add_words(words);
        dict
    }

    /// Add extra words (lowercased, blanks skipped).
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Whether the lowercased candidate is a known-weak password.
    pub fn contains(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        COMMON_PASSWORDS.contains(lowered.as_str()) || self.extra.contains(&lowered)
    }

    /// Total entries: built-ins plus extras.
    pub fn len(&self) -> usize {
        COMMON_PASSWORDS.len() + self.extra.len()
    }

    /// Always false — the built-in list is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
