//! Smoke test: synthesize a fixed greeting to output.wav.

use anyhow::{Context, Result};
use clap::Parser;
use coqui_say::cli::{self, Invocation, SmokeArgs};
use coqui_say::logging;

fn main() -> Result<()> {
    let args = SmokeArgs::parse();
    logging::init(args.engine.verbose);

    let config = args
        .engine
        .resolve()
        .context("Failed to resolve engine configuration")?;

    cli::speak(config, &Invocation::smoke())?;
    Ok(())
}
