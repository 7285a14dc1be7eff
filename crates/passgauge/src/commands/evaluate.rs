//! Evaluate command — full strength evaluation.

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use passgauge_core::crack::DEFAULT_GUESS_RATE;
use passgauge_core::dictionary::Dictionary;
use passgauge_core::evaluate::{self, RequirementsReport};

use super::read_candidate;

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Password to evaluate. Omit and use --stdin to avoid shell history.
    pub password: Option<String>,

    /// Read the password from stdin instead of an argument.
    #[arg(long)]
    pub stdin: bool,

    /// Attacker guesses per second.
    #[arg(long)]
    pub guess_rate: Option<f64>,

    /// Minimum acceptable entropy in bits.
    #[arg(long)]
    pub min_bits: Option<f64>,
}

/// Run the full evaluation pipeline and render every section.
#[instrument(name = "cmd_evaluate", skip_all)]
pub fn cmd_evaluate(
    args: EvaluateArgs,
    global_json: bool,
    config_guess_rate: Option<f64>,
    config_min_bits: Option<f64>,
    dictionary: &Dictionary,
    max_candidate: Option<usize>,
) -> anyhow::Result<()> {
    debug!(guess_rate = ?args.guess_rate, min_bits = ?args.min_bits, "executing evaluate command");

    let candidate = read_candidate(args.password, args.stdin, max_candidate)?;
    let guess_rate = args
        .guess_rate
        .or(config_guess_rate)
        .unwrap_or(DEFAULT_GUESS_RATE);
    let min_bits = args.min_bits.or(config_min_bits);

    let report = evaluate::evaluate(&candidate, guess_rate, dictionary, min_bits)
        .context("failed to evaluate password")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    print_requirements(&report.requirements);

    let mut classes = Vec::new();
    if report.charset.has_lower {
        classes.push("lower");
    }
    if report.charset.has_upper {
        classes.push("upper");
    }
    if report.charset.has_digit {
        classes.push("digits");
    }
    if report.charset.has_special {
        classes.push("specials");
    }
    println!(
        "\n  {} {} (alphabet size {})",
        "Charset:".cyan(),
        classes.join(" + "),
        report.charset.effective_size,
    );

    println!(
        "\n  {} {:.2} bits — {} ({}%)",
        "Entropy:".cyan(),
        report.entropy.bits,
        report.entropy.label.bold(),
        report.meter_percent,
    );

    if report.crack.dictionary_hit {
        println!(
            "\n  {} very common password — crackable in {}",
            "Dictionary:".red(),
            report.crack.human_readable,
        );
    } else {
        println!(
            "\n  {} {} at {:.0e} guesses/s",
            "Crack time:".cyan(),
            report.crack.human_readable,
            guess_rate,
        );
    }

    if report.below_min {
        let min = report.min_bits.unwrap_or(0.0);
        bail!(
            "password scores {:.2} bits (minimum: {:.0}). Use a longer or more varied password.",
            report.entropy.bits,
            min,
        );
    }

    Ok(())
}

/// Render the composition checklist with pass/fail marks.
fn print_requirements(requirements: &RequirementsReport) {
    println!("  {}", "Requirements:".cyan());
    print_check(requirements.lowercase, "Lowercase letter");
    print_check(requirements.uppercase, "Uppercase letter");
    print_check(requirements.digit, "Number");
    print_check(requirements.special, "Special character (@, #, $, etc.)");
    print_check(requirements.min_length, "At least 8 characters");
}

fn print_check(ok: bool, label: &str) {
    if ok {
        println!("    {} {label}", "✓".green());
    } else {
        println!("    {} {label}", "✗".red());
    }
}
