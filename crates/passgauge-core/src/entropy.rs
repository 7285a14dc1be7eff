//! Entropy estimation and strength labeling.
//!
//! Formula: `bits = length × log2(effective_size)`, rounded to 2 decimals.
//!
//! The label scale follows the usual brute-force feasibility bands:
//! below 28 bits is crackable in moments, 80 bits and up is out of reach
//! for the assumed attacker.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charset::CharsetProfile;

/// Bits value at which the strength meter reads 100%.
pub const METER_MAX_BITS: f64 = 80.0;

/// Qualitative strength band for an entropy estimate.
///
/// Bands are ordered weakest to strongest, so labels can be compared
/// directly when gating on a minimum acceptable band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StrengthLabel {
    /// Below 28 bits.
    VeryWeak,
    /// 28 to just under 36 bits.
    Weak,
    /// 36 to just under 60 bits.
    Fair,
    /// 60 to just under 80 bits.
    Strong,
    /// 80 bits and above.
    VeryStrong,
}

impl StrengthLabel {
    /// Label for a bits value. Thresholds are half-open: a value sitting
    /// exactly on a boundary belongs to the stronger band.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Self::VeryWeak
        } else if bits < 36.0 {
            Self::Weak
        } else if bits < 60.0 {
            Self::Fair
        } else if bits < 80.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    /// Returns the label as display text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of entropy estimation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct EntropyEstimate {
    /// Estimated entropy in bits, rounded to 2 decimal places.
    pub bits: f64,
    /// Qualitative strength band for `bits`.
    pub label: StrengthLabel,
}

/// Estimate entropy of a candidate against its charset profile.
///
/// Empty candidates and profiles with `effective_size ≤ 1` score 0 bits
/// (the latter guards `log2` of a non-positive argument). Total over all
/// inputs; the label is derived from the rounded bits value.
#[tracing::instrument(skip(candidate), fields(len = candidate.chars().count(), size = profile.effective_size))]
pub fn estimate(candidate: &str, profile: &CharsetProfile) -> EntropyEstimate {
    let length = candidate.chars().count();

    let bits = if length == 0 || profile.effective_size <= 1 {
        0.0
    } else {
        round2(length as f64 * f64::from(profile.effective_size).log2())
    };

    EntropyEstimate {
        bits,
        label: StrengthLabel::from_bits(bits),
    }
}

/// Strength-meter fill percentage for a bits value: clamp to
/// `[0, METER_MAX_BITS]`, scale linearly to `[0, 100]`, round.
pub fn meter_percent(bits: f64) -> u8 {
    let clamped = bits.clamp(0.0, METER_MAX_BITS);
    (clamped / METER_MAX_BITS * 100.0).round() as u8
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
