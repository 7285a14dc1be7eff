//! Crack command — brute-force attack simulation.

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use passgauge_core::charset;
use passgauge_core::crack::{self, DEFAULT_GUESS_RATE};
use passgauge_core::dictionary::Dictionary;

use super::read_candidate;

/// Shortest demo animation, used for instantly-cracked passwords.
const DEMO_MIN_MS: f64 = 400.0;
/// Longest demo animation, reached well before astronomical crack times.
const DEMO_MAX_MS: f64 = 2500.0;

/// Arguments for the `crack` subcommand.
#[derive(Args, Debug)]
pub struct CrackArgs {
    /// Password to attack. Omit and use --stdin to avoid shell history.
    pub password: Option<String>,

    /// Read the password from stdin instead of an argument.
    #[arg(long)]
    pub stdin: bool,

    /// Attacker guesses per second.
    #[arg(long)]
    pub guess_rate: Option<f64>,

    /// Skip the attack-meter animation.
    #[arg(long)]
    pub no_animate: bool,
}

/// Simulate a brute-force attack and report the projected crack time.
#[instrument(name = "cmd_crack", skip_all)]
pub fn cmd_crack(
    args: CrackArgs,
    global_json: bool,
    global_quiet: bool,
    config_guess_rate: Option<f64>,
    dictionary: &Dictionary,
    max_candidate: Option<usize>,
) -> anyhow::Result<()> {
    debug!(guess_rate = ?args.guess_rate, "executing crack command");

    let candidate = read_candidate(args.password, args.stdin, max_candidate)?;
    let guess_rate = args
        .guess_rate
        .or(config_guess_rate)
        .unwrap_or(DEFAULT_GUESS_RATE);

    let profile = charset::analyze(&candidate);
    let estimate = crack::simulate(&candidate, &profile, guess_rate, dictionary)
        .context("failed to simulate attack")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    if estimate.dictionary_hit {
        println!("{} very common password!", "Dictionary attack:".red().bold());
        println!("Estimated time to crack: {}", estimate.human_readable);
        return Ok(());
    }

    if !(global_quiet || args.no_animate) {
        animate_attack(estimate.seconds)?;
    }

    println!("{}", "Brute-force attack estimate:".bold());
    println!(
        "Estimated time to crack: {} (at {:.0e} guesses/s)",
        estimate.human_readable, guess_rate,
    );

    Ok(())
}

/// Render the attack meter: a bar that fills over a duration scaled with
/// the magnitude of the crack time, capped for the demo.
fn animate_attack(seconds: f64) -> anyhow::Result<()> {
    let scaled_ms = (DEMO_MIN_MS + (seconds + 1.0).log10() * 600.0).min(DEMO_MAX_MS);

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.red} {percent:>3}%")
            .context("attack meter template")?,
    );

    let steps = 50;
    let tick = Duration::from_millis((scaled_ms / steps as f64) as u64);
    for i in 1..=steps {
        std::thread::sleep(tick);
        bar.set_position(i * 2);
    }
    bar.finish();

    Ok(())
}
