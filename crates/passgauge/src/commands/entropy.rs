//! Entropy command — bits, strength label, and meter percentage.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use passgauge_core::charset;
use passgauge_core::entropy::{self, EntropyEstimate, StrengthLabel};

use super::read_candidate;

/// Arguments for the `entropy` subcommand.
#[derive(Args, Debug)]
pub struct EntropyArgs {
    /// Password to score. Omit and use --stdin to avoid shell history.
    pub password: Option<String>,

    /// Read the password from stdin instead of an argument.
    #[arg(long)]
    pub stdin: bool,

    /// Minimum acceptable entropy in bits.
    #[arg(long)]
    pub min_bits: Option<f64>,

    /// Minimum acceptable strength band.
    #[arg(long, value_enum)]
    pub min_label: Option<StrengthLabel>,
}

/// JSON shape for the entropy command: the estimate plus its meter reading.
#[derive(serde::Serialize)]
struct EntropyOutput {
    #[serde(flatten)]
    estimate: EntropyEstimate,
    meter_percent: u8,
}

/// Score a password's entropy and optionally gate on a minimum.
#[instrument(name = "cmd_entropy", skip_all)]
pub fn cmd_entropy(
    args: EntropyArgs,
    global_json: bool,
    config_min_bits: Option<f64>,
    max_candidate: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_bits = ?args.min_bits, "executing entropy command");

    let candidate = read_candidate(args.password, args.stdin, max_candidate)?;
    let min_bits = args.min_bits.or(config_min_bits);

    let profile = charset::analyze(&candidate);
    let estimate = entropy::estimate(&candidate, &profile);
    let percent = entropy::meter_percent(estimate.bits);

    if global_json {
        let output = EntropyOutput {
            estimate,
            meter_percent: percent,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(min) = args.min_label
        && estimate.label < min
    {
        bail!(
            "password is {} (minimum: {}). Use a longer or more varied password.",
            estimate.label,
            min,
        );
    }

    if let Some(min) = min_bits {
        if estimate.bits < min {
            bail!(
                "password scores {:.2} bits (minimum: {min:.0}). Use a longer or more varied password.",
                estimate.bits,
            );
        }
        println!(
            "{} {:.2} bits — {} (minimum: {min:.0})",
            "PASS:".green(),
            estimate.bits,
            estimate.label,
        );
    } else {
        println!("{:.2} bits — {} ({percent}%)", estimate.bits, estimate.label);
    }

    Ok(())
}
