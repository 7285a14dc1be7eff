//! Brute-force crack-time simulation.
//!
//! Projects how long an attacker at a fixed guess rate needs to exhaust the
//! candidate's search space (`effective_size ^ length`). Known-weak
//! passwords short-circuit to "instantly guessable" before any math runs.
//!
//! Direct exponentiation overflows `f64` to infinity near 10^308, well
//! inside the range of realistic long passphrases. Once the direct product
//! would overflow, the computation routes through base-10 logarithms so the
//! seconds projection stays meaningful past the point where the guess count
//! no longer fits — `total_guesses` reads ∞, while `seconds` only goes to ∞
//! once its own exponent leaves the representable range too.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charset::CharsetProfile;
use crate::dictionary::Dictionary;
use crate::error::{EvaluationError, EvaluationResult};

/// Reference attacker throughput: 2 billion guesses per second.
pub const DEFAULT_GUESS_RATE: f64 = 2_000_000_000.0;

/// Largest base-10 exponent a finite `f64` can carry.
const MAX_LOG10: f64 = 308.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
/// 365-day year; leap years are ignored.
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Result of crack-time simulation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CrackEstimate {
    /// Total search-space size in guesses. `∞` once the space exceeds what
    /// `f64` can represent; 0 for dictionary hits.
    pub total_guesses: f64,
    /// Projected seconds to exhaust the space at the given guess rate.
    pub seconds: f64,
    /// Human-readable rendering of `seconds`.
    pub human_readable: String,
    /// Whether the candidate was found in the known-weak dictionary.
    pub dictionary_hit: bool,
}

/// Simulate a brute-force attack against `candidate`.
///
/// Decision order: dictionary membership (lowercased) beats everything;
/// then the charset profile must classify at least one character; then the
/// search space is computed directly, or via logarithms once the direct
/// product would overflow.
///
/// # Errors
///
/// [`EvaluationError::EmptyCandidate`] for the empty string,
/// [`EvaluationError::NoPrintableCharacters`] when the profile has
/// `effective_size == 0` for a non-empty candidate.
#[tracing::instrument(skip(candidate, dictionary), fields(len = candidate.chars().count(), size = profile.effective_size, guess_rate))]
pub fn simulate(
    candidate: &str,
    profile: &CharsetProfile,
    guess_rate: f64,
    dictionary: &Dictionary,
) -> EvaluationResult<CrackEstimate> {
    if candidate.is_empty() {
        return Err(EvaluationError::EmptyCandidate);
    }

    if dictionary.contains(candidate) {
        tracing::debug!("dictionary hit, skipping brute-force projection");
        return Ok(CrackEstimate {
            total_guesses: 0.0,
            seconds: 0.0,
            human_readable: "< 1 second".to_string(),
            dictionary_hit: true,
        });
    }

    if profile.effective_size == 0 {
        return Err(EvaluationError::NoPrintableCharacters);
    }

    let length = candidate.chars().count() as f64;
    let size = f64::from(profile.effective_size);
    let log10_total = length * size.log10();

    let (total_guesses, seconds) = if log10_total > MAX_LOG10 {
        let log10_seconds = log10_total - guess_rate.log10();
        let seconds = if log10_seconds > MAX_LOG10 {
            f64::INFINITY
        } else {
            10f64.powf(log10_seconds)
        };
        (f64::INFINITY, seconds)
    } else {
        let total = size.powf(length);
        (total, total / guess_rate)
    };

    Ok(CrackEstimate {
        total_guesses,
        seconds,
        human_readable: format_seconds(seconds),
        dictionary_hit: false,
    })
}

/// Render a seconds value as a human-readable duration.
///
/// Infinite input renders as `"∞"`. Finite values pick the largest unit
/// that keeps the number above 1 and print it with 2 decimal places.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "∞".to_string();
    }
    if seconds < SECONDS_PER_MINUTE {
        format!("{seconds:.2} seconds")
    } else if seconds < SECONDS_PER_HOUR {
        format!("{:.2} minutes", seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        format!("{:.2} hours", seconds / SECONDS_PER_HOUR)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.2} days", seconds / SECONDS_PER_DAY)
    } else {
        format!("{:.2} years", seconds / SECONDS_PER_YEAR)
    }
}
