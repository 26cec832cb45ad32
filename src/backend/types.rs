//! Backend request types and errors.

use thiserror::Error;

/// Errors that can occur when talking to the synthesis engine.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    #[error("Engine failed: {0}")]
    Engine(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Request for speech synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub speaker: Option<String>,
}

impl SynthesisRequest {
    /// Create a new synthesis request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: None,
        }
    }

    /// Set the speaker voice.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}
