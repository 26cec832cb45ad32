//! Synthesis engine orchestrator.
//!
//! Validates requests against the loaded model and coordinates the backend
//! call with the audio checks and the output write.

mod synthesizer;

pub use synthesizer::{SynthesisError, Synthesizer, validate_text};
