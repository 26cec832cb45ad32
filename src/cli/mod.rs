//! CLI argument parsing and validation.

mod args;
mod run;

pub use args::{Args, EngineArgs, Invocation, SMOKE_OUTPUT, SMOKE_SPEAKER, SMOKE_TEXT, SmokeArgs};
pub use run::{list_speakers, speak};
