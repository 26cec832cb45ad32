//! coqui-say CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use coqui_say::cli::{self, Args};
use coqui_say::logging;

fn main() -> Result<()> {
    // Usage errors exit here, before any model is loaded.
    let args = Args::parse();
    logging::init(args.engine.verbose);

    let config = args
        .engine
        .resolve()
        .context("Failed to resolve engine configuration")?;

    if args.list_speakers {
        return cli::list_speakers(config);
    }

    let invocation = args
        .invocation()
        .context("speaker, text and out_path are required")?;

    cli::speak(config, &invocation)?;
    Ok(())
}
