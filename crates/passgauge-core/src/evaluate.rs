//! Candidate evaluation engine.
//!
//! Runs the full pipeline — charset profile, entropy estimate, composition
//! requirements, crack-time simulation — and assembles one serializable
//! report, applying the optional minimum-bits gate where configured.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charset::{self, CharsetProfile};
use crate::crack::{self, CrackEstimate};
use crate::dictionary::Dictionary;
use crate::entropy::{self, EntropyEstimate};
use crate::error::EvaluationResult;

/// Length at which the composition checklist considers a candidate long
/// enough.
pub const MIN_RECOMMENDED_LENGTH: usize = 8;

/// Composition checklist for a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct RequirementsReport {
    /// Contains a lowercase letter.
    pub lowercase: bool,
    /// Contains an uppercase letter.
    pub uppercase: bool,
    /// Contains a digit.
    pub digit: bool,
    /// Contains a special character.
    pub special: bool,
    /// At least [`MIN_RECOMMENDED_LENGTH`] characters long.
    pub min_length: bool,
    /// All of the above hold.
    pub satisfied: bool,
}

/// Combined results of evaluating one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationReport {
    /// Character-class profile.
    pub charset: CharsetProfile,
    /// Entropy estimate and strength band.
    pub entropy: EntropyEstimate,
    /// Strength-meter fill percentage (0–100).
    pub meter_percent: u8,
    /// Composition checklist.
    pub requirements: RequirementsReport,
    /// Crack-time projection.
    pub crack: CrackEstimate,
    /// Minimum acceptable bits (if a gate was applied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bits: Option<f64>,
    /// Whether the estimate falls below the minimum.
    pub below_min: bool,
}

/// Check the composition requirements for a candidate.
pub fn check_requirements(candidate: &str, profile: &CharsetProfile) -> RequirementsReport {
    let min_length = candidate.chars().count() >= MIN_RECOMMENDED_LENGTH;
    let satisfied = profile.has_lower
        && profile.has_upper
        && profile.has_digit
        && profile.has_special
        && min_length;

    RequirementsReport {
        lowercase: profile.has_lower,
        uppercase: profile.has_upper,
        digit: profile.has_digit,
        special: profile.has_special,
        min_length,
        satisfied,
    }
}

/// Evaluate a candidate end to end.
///
/// # Errors
///
/// Propagates [`crate::error::EvaluationError`] from the crack-time
/// simulation: empty candidates and (defensively) zero-size profiles.
#[tracing::instrument(skip(candidate, dictionary), fields(len = candidate.chars().count(), guess_rate))]
pub fn evaluate(
    candidate: &str,
    guess_rate: f64,
    dictionary: &Dictionary,
    min_bits: Option<f64>,
) -> EvaluationResult<EvaluationReport> {
    let charset = charset::analyze(candidate);
    let entropy = entropy::estimate(candidate, &charset);
    let requirements = check_requirements(candidate, &charset);
    let crack = crack::simulate(candidate, &charset, guess_rate, dictionary)?;

    let below_min = min_bits.is_some_and(|min| entropy.bits < min);

    Ok(EvaluationReport {
        charset,
        entropy,
        meter_percent: entropy::meter_percent(entropy.bits),
        requirements,
        crack,
        min_bits,
        below_min,
    })
}
