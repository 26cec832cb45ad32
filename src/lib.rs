//! coqui-say: single-shot multi-speaker text-to-speech CLI.
//!
//! This crate loads a pretrained Coqui TTS model through an external
//! engine, synthesizes one piece of text with a chosen speaker voice and
//! writes the result as a WAV file.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
