//! Command implementations.

use anyhow::{Context, bail};

pub mod crack;
pub mod entropy;
pub mod evaluate;
pub mod generate;
pub mod info;

/// Resolve the candidate password from the positional argument or stdin and
/// validate its length against the configured limit.
///
/// Combines the input and length-validation steps every evaluation command
/// needs. Reading from stdin keeps the password out of shell history.
pub fn read_candidate(
    password: Option<String>,
    use_stdin: bool,
    max_chars: Option<usize>,
) -> anyhow::Result<String> {
    let candidate = match (password, use_stdin) {
        (Some(_), true) => {
            bail!("pass the password either as an argument or via --stdin, not both")
        }
        (Some(p), false) => p,
        (None, true) => {
            let mut line = String::new();
            std::io::stdin()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
        (None, false) => bail!("no password given; pass one as an argument or use --stdin"),
    };

    if let Some(max) = max_chars {
        let len = candidate.chars().count();
        if len > max {
            bail!("password too long: {len} characters (limit: {max})");
        }
    }

    Ok(candidate)
}
