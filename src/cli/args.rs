//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};

use crate::config::{BackendKind, ConfigError, ConfigOverrides, EngineConfig};

/// Speaker used by the smoke test.
pub const SMOKE_SPEAKER: &str = "p273";

/// Text spoken by the smoke test.
pub const SMOKE_TEXT: &str = "Hello, this is Coqui speaking.";

/// File written by the smoke test, relative to the working directory.
pub const SMOKE_OUTPUT: &str = "output.wav";

/// Synthesize one sentence with a chosen speaker voice into a WAV file.
#[derive(Parser, Debug)]
#[command(name = "coqui-say")]
#[command(about = "Synthesize text with a multi-speaker Coqui TTS model")]
#[command(version)]
pub struct Args {
    /// Speaker id known to the model (e.g. p273)
    #[arg(required_unless_present = "list_speakers")]
    pub speaker: Option<String>,

    /// Text to synthesize
    #[arg(required_unless_present = "list_speakers")]
    pub text: Option<String>,

    /// Output WAV file, overwritten if it exists
    #[arg(required_unless_present = "list_speakers")]
    pub out_path: Option<PathBuf>,

    /// Print the model's speaker ids and exit
    #[arg(long, conflicts_with_all = ["speaker", "text", "out_path"])]
    pub list_speakers: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Run the fixed smoke test: speaker p273 says a greeting into output.wav.
#[derive(Parser, Debug)]
#[command(name = "coqui-smoke")]
#[command(about = "Synthesize a fixed greeting to output.wav to check the engine works")]
#[command(version)]
pub struct SmokeArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Engine selection flags shared by every binary.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON config file (default: ~/.coqui-say/config.json if present)
    #[arg(long, env = "COQUI_SAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretrained model name
    #[arg(long, env = "COQUI_MODEL_NAME")]
    pub model_name: Option<String>,

    /// How to reach the engine
    #[arg(long, value_enum, env = "COQUI_BACKEND")]
    pub backend: Option<BackendKind>,

    /// Coqui CLI program used by the process backend
    #[arg(long, env = "COQUI_TTS_COMMAND")]
    pub tts_command: Option<String>,

    /// Base URL of a running tts-server
    #[arg(long, env = "COQUI_SERVER_URL")]
    pub server_url: Option<String>,

    /// Run the model on the GPU
    #[arg(long, conflicts_with = "no_gpu")]
    pub gpu: bool,

    /// Run the model on the CPU even if the config file enables the GPU
    #[arg(long)]
    pub no_gpu: bool,

    /// Show the engine's progress bars
    #[arg(long, conflicts_with = "no_progress_bar")]
    pub progress_bar: bool,

    /// Hide progress bars even if the config file enables them
    #[arg(long)]
    pub no_progress_bar: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// A complete synthesis invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub speaker: String,
    pub text: String,
    pub out_path: PathBuf,
}

impl Invocation {
    /// The fixed smoke-test invocation.
    pub fn smoke() -> Self {
        Self {
            speaker: SMOKE_SPEAKER.to_string(),
            text: SMOKE_TEXT.to_string(),
            out_path: PathBuf::from(SMOKE_OUTPUT),
        }
    }
}

impl Args {
    /// The requested synthesis, or `None` when only listing speakers.
    pub fn invocation(&self) -> Option<Invocation> {
        match (&self.speaker, &self.text, &self.out_path) {
            (Some(speaker), Some(text), Some(out_path)) => Some(Invocation {
                speaker: speaker.clone(),
                text: text.clone(),
                out_path: out_path.clone(),
            }),
            _ => None,
        }
    }
}

impl EngineArgs {
    /// Flag and environment values as config overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model_name: self.model_name.clone(),
            backend: self.backend,
            tts_command: self.tts_command.clone(),
            server_url: self.server_url.clone(),
            use_gpu: switch(self.gpu, self.no_gpu),
            progress_bar: switch(self.progress_bar, self.no_progress_bar),
        }
    }

    /// Resolve the engine configuration from file, environment and flags.
    pub fn resolve(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::resolve(self.config.as_deref(), &self.overrides())
    }
}

/// An on/off flag pair as an optional override.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
