//! Generate command — password suggestions.

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use passgauge_core::generate;

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Suggestion length in characters (minimum 4).
    #[arg(long)]
    pub length: Option<usize>,

    /// Number of suggestions to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

/// JSON shape for the generate command.
#[derive(serde::Serialize)]
struct GenerateOutput {
    length: usize,
    passwords: Vec<String>,
}

/// Generate one or more password suggestions.
///
/// Every suggestion contains at least one lowercase letter, one uppercase
/// letter, one digit, and one special character.
#[instrument(name = "cmd_generate", skip_all, fields(count = args.count))]
pub fn cmd_generate(
    args: GenerateArgs,
    global_json: bool,
    config_generate_length: Option<usize>,
) -> anyhow::Result<()> {
    debug!(length = ?args.length, count = args.count, "executing generate command");

    let length = args
        .length
        .or(config_generate_length)
        .unwrap_or(generate::DEFAULT_LENGTH);

    let passwords = (0..args.count)
        .map(|_| generate::generate(length))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to generate password")?;

    if global_json {
        let output = GenerateOutput { length, passwords };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for password in &passwords {
            println!("{password}");
        }
    }

    Ok(())
}
