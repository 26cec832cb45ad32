//! Backend that runs the Coqui `tts` command.

use std::ffi::OsString;
use std::process::{Command, Output};

use tempfile::TempDir;
use tracing::debug;

use crate::config::EngineConfig;

use super::Backend;
use super::speakers::parse_speaker_listing;
use super::types::{BackendError, SynthesisRequest};

/// Lines of stderr kept when the engine fails.
const STDERR_TAIL_LINES: usize = 8;

/// Process-based backend.
///
/// Each operation is a fresh engine process, so the model is loaded by
/// the command itself.
pub struct ProcessBackend {
    program: String,
    leading_args: Vec<String>,
    model_name: String,
    use_gpu: bool,
    progress_bar: bool,
}

impl ProcessBackend {
    /// Create a process backend from engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            program: config.tts_command.clone(),
            leading_args: config.tts_args.clone(),
            model_name: config.model_name.clone(),
            use_gpu: config.use_gpu,
            progress_bar: config.progress_bar,
        }
    }

    /// Arguments shared by every invocation.
    fn model_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        args.push("--model_name".into());
        args.push(self.model_name.clone().into());
        args.push("--progress_bar".into());
        args.push(if self.progress_bar { "True" } else { "False" }.into());
        if self.use_gpu {
            args.push("--use_cuda".into());
            args.push("true".into());
        }
        args
    }

    /// Arguments for listing speakers.
    pub fn speaker_args(&self) -> Vec<OsString> {
        let mut args = self.model_args();
        args.push("--list_speaker_idxs".into());
        args
    }

    /// Arguments for a synthesis run writing to `out_path`.
    pub fn synthesis_args(&self, request: &SynthesisRequest, out_path: &std::path::Path) -> Vec<OsString> {
        let mut args = self.model_args();
        args.push("--text".into());
        args.push(request.text.clone().into());
        if let Some(speaker) = &request.speaker {
            args.push("--speaker_idx".into());
            args.push(speaker.clone().into());
        }
        args.push("--out_path".into());
        args.push(out_path.as_os_str().to_owned());
        args
    }

    fn run(&self, args: Vec<OsString>) -> Result<Output, BackendError> {
        debug!(program = %self.program, ?args, "running engine");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| BackendError::Unavailable(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            return Err(BackendError::Engine(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr_tail(&output.stderr)
            )));
        }

        Ok(output)
    }
}

impl Backend for ProcessBackend {
    fn speakers(&self) -> Result<Vec<String>, BackendError> {
        let output = self.run(self.speaker_args())?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_speaker_listing(&stdout))
    }

    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        let work_dir = TempDir::new()?;
        let out_path = work_dir.path().join("out.wav");

        self.run(self.synthesis_args(request, &out_path))?;

        std::fs::read(&out_path).map_err(|e| {
            BackendError::InvalidResponse(format!("engine produced no audio file: {e}"))
        })
    }
}

/// Last few non-empty lines of the engine's stderr.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return "no output".to_string();
    }
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
