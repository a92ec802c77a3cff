use anyhow::{anyhow, Result};
use itertools::Itertools;

/// Fails if the command line has arguments the subcommand did not consume.
pub fn reject_unused(args: pico_args::Arguments) -> Result<()> {
    let remaining = args.finish();
    if remaining.is_empty() {
        return Ok(());
    }
    Err(anyhow!(
        "Unexpected arguments: {}",
        remaining.iter().map(|arg| arg.to_string_lossy()).join(" ")
    ))
}
