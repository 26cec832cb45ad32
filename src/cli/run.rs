//! Shared entry point for the binaries.

use anyhow::{Context, Result};

use crate::audio::WavSummary;
use crate::backend::create_backend;
use crate::config::EngineConfig;
use crate::engine::{Synthesizer, validate_text};

use super::args::Invocation;

/// Load the engine and print the model's speaker ids.
pub fn list_speakers(config: EngineConfig) -> Result<()> {
    let backend = create_backend(&config).context("Failed to set up the synthesis engine")?;
    let synthesizer = Synthesizer::load(backend, config).context("Failed to load TTS model")?;

    let speakers = synthesizer.speakers().unwrap_or_default();
    if speakers.is_empty() {
        println!("Model has a single voice; no speaker ids.");
        return Ok(());
    }

    for speaker in speakers {
        println!("{speaker}");
    }

    Ok(())
}

/// Run one synthesis and report the written file.
///
/// Text problems are reported before the model is loaded. The model is
/// loaded once: a process backend leaves unknown speakers to the engine
/// instead of listing them first.
pub fn speak(config: EngineConfig, invocation: &Invocation) -> Result<WavSummary> {
    validate_text(&invocation.text, config.max_text_chars)?;

    let backend = create_backend(&config).context("Failed to set up the synthesis engine")?;
    let synthesizer = if backend.checks_speakers_up_front() {
        Synthesizer::load(backend, config).context("Failed to load TTS model")?
    } else {
        Synthesizer::new(backend, config)?
    };

    let summary = synthesizer
        .synthesize_to_file(&invocation.text, &invocation.speaker, &invocation.out_path)
        .with_context(|| {
            format!(
                "Failed to synthesize speech to {}",
                invocation.out_path.display()
            )
        })?;

    println!("Audio saved to: {}", invocation.out_path.display());
    println!("  Speaker: {}", invocation.speaker);
    println!(
        "  Duration: {:.2}s ({} Hz, {} ch)",
        summary.duration_secs, summary.sample_rate, summary.channels
    );

    Ok(summary)
}
