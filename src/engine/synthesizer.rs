//! Synthesizer implementation.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::audio::{AudioError, WavSummary, inspect_wav, write_atomic};
use crate::backend::{Backend, BackendError, SynthesisRequest};
use crate::config::{ConfigError, EngineConfig};

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Text to synthesize cannot be empty")]
    EmptyText,

    #[error("Text is too long: {len} characters, maximum is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("Unknown speaker '{speaker}' ({available} speakers available, try --list-speakers)")]
    UnknownSpeaker { speaker: String, available: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

/// Check text against the length limits without touching the engine.
pub fn validate_text(text: &str, max_chars: usize) -> Result<(), SynthesisError> {
    if text.trim().is_empty() {
        return Err(SynthesisError::EmptyText);
    }

    let len = text.chars().count();
    if len > max_chars {
        return Err(SynthesisError::TextTooLong { len, max: max_chars });
    }

    Ok(())
}

/// A multi-speaker synthesis engine.
///
/// Owns its backend. When built with [`Synthesizer::load`] it also holds
/// the speaker set and rejects unknown speakers itself; otherwise the
/// engine reports them during synthesis.
pub struct Synthesizer<B: Backend> {
    backend: B,
    config: EngineConfig,
    speakers: Option<Vec<String>>,
}

impl<B: Backend> Synthesizer<B> {
    /// Wrap `backend` without querying the model's speakers.
    pub fn new(backend: B, config: EngineConfig) -> Result<Self, SynthesisError> {
        config.validate()?;

        Ok(Self {
            backend,
            config,
            speakers: None,
        })
    }

    /// Load the model behind `backend` and record its speakers.
    pub fn load(backend: B, config: EngineConfig) -> Result<Self, SynthesisError> {
        let mut synthesizer = Self::new(backend, config)?;

        info!(
            model = %synthesizer.config.model_name,
            backend = synthesizer.config.backend.as_str(),
            "loading model"
        );
        let speakers = synthesizer.backend.speakers()?;
        debug!(count = speakers.len(), "model speakers loaded");

        synthesizer.speakers = Some(speakers);
        Ok(synthesizer)
    }

    /// Speaker ids known to the model, if they were loaded.
    pub fn speakers(&self) -> Option<&[String]> {
        self.speakers.as_deref()
    }

    /// Validate a request against the text limits and the speaker set.
    ///
    /// Without a loaded speaker set only the text is checked.
    pub fn check_request(&self, text: &str, speaker: &str) -> Result<(), SynthesisError> {
        validate_text(text, self.config.max_text_chars)?;

        if let Some(speakers) = &self.speakers
            && !speakers.iter().any(|s| s == speaker)
        {
            return Err(SynthesisError::UnknownSpeaker {
                speaker: speaker.to_string(),
                available: speakers.len(),
            });
        }

        Ok(())
    }

    /// Synthesize `text` with `speaker`'s voice.
    ///
    /// # Returns
    /// WAV audio that decodes and holds at least one frame
    pub fn synthesize(&self, text: &str, speaker: &str) -> Result<(Vec<u8>, WavSummary), SynthesisError> {
        self.check_request(text, speaker)?;

        let request = SynthesisRequest::new(text).with_speaker(speaker);
        let audio = self.backend.synthesize(&request)?;
        let summary = inspect_wav(&audio)?;

        debug!(
            bytes = audio.len(),
            duration_secs = summary.duration_secs,
            "synthesized"
        );

        Ok((audio, summary))
    }

    /// Synthesize and write the WAV to `out_path`, replacing any existing file.
    ///
    /// Nothing is written unless synthesis succeeds.
    pub fn synthesize_to_file(
        &self,
        text: &str,
        speaker: &str,
        out_path: &Path,
    ) -> Result<WavSummary, SynthesisError> {
        let (audio, summary) = self.synthesize(text, speaker)?;
        write_atomic(out_path, &audio)?;
        info!(path = %out_path.display(), "audio written");
        Ok(summary)
    }
}
