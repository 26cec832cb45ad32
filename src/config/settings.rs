//! Engine configuration with file and override layers.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Pretrained model used when nothing else is configured.
pub const DEFAULT_MODEL_NAME: &str = "tts_models/en/vctk/vits";

/// Default address of a locally running `tts-server`.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5002";

/// Errors that can occur while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error reading config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the synthesis engine is reached.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Run the Coqui `tts` command once per operation
    #[default]
    Process,

    /// Call a running Coqui `tts-server`
    Server,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Process => "process",
            BackendKind::Server => "server",
        }
    }
}

/// Configuration for the synthesis engine.
///
/// `Default` reproduces the fixed setup of the tool: the VCTK VITS model,
/// CPU only, no progress reporting, run through the local `tts` command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub model_name: String,
    pub use_gpu: bool,
    pub progress_bar: bool,
    pub backend: BackendKind,
    pub tts_command: String,
    /// Arguments placed before the generated ones, e.g. `["-m", "TTS.bin.synthesize"]`.
    pub tts_args: Vec<String>,
    pub server_url: String,
    pub timeout_secs: u64,
    pub max_text_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            use_gpu: false,
            progress_bar: false,
            backend: BackendKind::Process,
            tts_command: "tts".to_string(),
            tts_args: Vec::new(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: 300,
            max_text_chars: 10_000,
        }
    }
}

/// Values that take precedence over the config file.
///
/// Filled from CLI flags and environment variables; `None` keeps the
/// underlying value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model_name: Option<String>,
    pub backend: Option<BackendKind>,
    pub tts_command: Option<String>,
    pub server_url: Option<String>,
    pub use_gpu: Option<bool>,
    pub progress_bar: Option<bool>,
}

impl EngineConfig {
    /// Default config file location: `~/.coqui-say/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".coqui-say").join("config.json"))
    }

    /// Load configuration from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;

        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// read when present and silently skipped otherwise.
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default)?,
                _ => Self::default(),
            },
        };

        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(model_name) = &overrides.model_name {
            self.model_name = model_name.clone();
        }
        if let Some(backend) = overrides.backend {
            self.backend = backend;
        }
        if let Some(command) = &overrides.tts_command {
            self.tts_command = command.clone();
        }
        if let Some(url) = &overrides.server_url {
            self.server_url = url.clone();
        }
        if let Some(use_gpu) = overrides.use_gpu {
            self.use_gpu = use_gpu;
        }
        if let Some(progress_bar) = overrides.progress_bar {
            self.progress_bar = progress_bar;
        }
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.trim().is_empty() {
            return Err(ConfigError::Invalid("model_name cannot be empty".to_string()));
        }

        if self.tts_command.trim().is_empty() {
            return Err(ConfigError::Invalid("tts_command cannot be empty".to_string()));
        }

        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }

        if self.max_text_chars == 0 {
            return Err(ConfigError::Invalid(
                "max_text_chars must be greater than zero".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
