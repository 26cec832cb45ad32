//! Communication with the external speech synthesis engine.
//!
//! The engine is either the Coqui `tts` command run as a child process or
//! a running Coqui `tts-server` reached over HTTP.

mod client;
mod process;
mod speakers;
mod types;

pub use client::HttpBackend;
pub use process::ProcessBackend;
pub use speakers::{parse_speaker_listing, parse_speaker_options};
pub use types::{BackendError, SynthesisRequest};

use crate::config::{BackendKind, EngineConfig};

/// Trait for synthesis engine communication.
///
/// Abstracts the engine so tests can substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// Load the model and report its speaker ids.
    ///
    /// An empty list means the model has a single voice.
    fn speakers(&self) -> Result<Vec<String>, BackendError>;

    /// Synthesize speech from text.
    ///
    /// # Returns
    /// Raw WAV audio data
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError>;
}

/// Backend selected by configuration.
pub enum EngineBackend {
    Process(ProcessBackend),
    Server(HttpBackend),
}

impl EngineBackend {
    /// Whether listing speakers is cheap enough to check every request.
    ///
    /// A process backend would load the model a second time just to list
    /// them, so it leaves unknown speakers to the engine.
    pub fn checks_speakers_up_front(&self) -> bool {
        matches!(self, EngineBackend::Server(_))
    }
}

impl Backend for EngineBackend {
    fn speakers(&self) -> Result<Vec<String>, BackendError> {
        match self {
            EngineBackend::Process(backend) => backend.speakers(),
            EngineBackend::Server(backend) => backend.speakers(),
        }
    }

    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        match self {
            EngineBackend::Process(backend) => backend.synthesize(request),
            EngineBackend::Server(backend) => backend.synthesize(request),
        }
    }
}

/// Create the backend named by the configuration.
pub fn create_backend(config: &EngineConfig) -> Result<EngineBackend, BackendError> {
    Ok(match config.backend {
        BackendKind::Process => EngineBackend::Process(ProcessBackend::new(config)),
        BackendKind::Server => EngineBackend::Server(HttpBackend::new(config)?),
    })
}
