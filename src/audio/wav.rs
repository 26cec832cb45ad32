//! WAV inspection and atomic output.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

/// Errors that can occur while checking or writing audio.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Engine returned audio that is not a valid WAV: {0}")]
    InvalidWav(#[from] hound::Error),

    #[error("Engine returned audio with no samples")]
    Empty,

    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format and length of a WAV buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavSummary {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub frames: u32,
    pub duration_secs: f32,
}

/// Decode the header of a WAV buffer and check it carries audio.
pub fn inspect_wav(bytes: &[u8]) -> Result<WavSummary, AudioError> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let frames = reader.duration();

    if frames == 0 || spec.sample_rate == 0 {
        return Err(AudioError::Empty);
    }

    Ok(WavSummary {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        frames,
        duration_secs: frames as f32 / spec.sample_rate as f32,
    })
}

/// Write `bytes` to `path`, replacing any existing file.
///
/// Data goes to a temporary file in the destination directory first and is
/// renamed into place, so a failed write leaves `path` as it was. An
/// existing file keeps its permissions; a new one gets the umask default.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AudioError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(AudioError::MissingDirectory(parent.to_path_buf()));
    }

    let write_failed = |source: std::io::Error| AudioError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = temp_file_in(parent).map_err(write_failed)?;
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_failed)?;
    }
    file.write_all(bytes).map_err(write_failed)?;
    file.as_file().sync_all().map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}

// Temp files default to 0600; ask for 0666 so the umask decides instead.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
