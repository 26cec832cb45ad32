//! Audio checks and output files.

mod wav;

pub use wav::{AudioError, WavSummary, inspect_wav, write_atomic};

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    /// A mono 16-bit WAV with `frames` samples of a 440 Hz tone.
    pub fn tone_wav(sample_rate: u32, frames: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..frames {
                let t = i as f32 / sample_rate as f32;
                let sample = (t * 440.0 * std::f32::consts::TAU).sin() * 0.3;
                writer.write_sample((sample * i16::MAX as f32) as i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::tone_wav;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_wav_reports_duration() {
        let bytes = tone_wav(22_050, 11_025);

        let summary = inspect_wav(&bytes).unwrap();

        assert_eq!(summary.sample_rate, 22_050);
        assert_eq!(summary.channels, 1);
        assert_eq!(summary.bits_per_sample, 16);
        assert_eq!(summary.frames, 11_025);
        assert!((summary.duration_secs - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_inspect_wav_rejects_empty_audio() {
        let bytes = tone_wav(22_050, 0);

        assert!(matches!(inspect_wav(&bytes), Err(AudioError::Empty)));
    }

    #[test]
    fn test_inspect_wav_rejects_garbage() {
        let result = inspect_wav(b"<html>Internal Server Error</html>");

        assert!(matches!(result, Err(AudioError::InvalidWav(_))));
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.wav");

        write_atomic(&path, b"RIFF data").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF data");
    }

    #[test]
    fn test_write_atomic_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.wav");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no").join("such").join("speech.wav");

        let result = write_atomic(&path, b"RIFF");

        assert!(matches!(result, Err(AudioError::MissingDirectory(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.wav");

        write_atomic(&path, b"RIFF").unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    fn mode_of(path: &std::path::Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        for mode in [0o644, 0o640, 0o666] {
            let path = temp_dir.path().join(format!("speech-{mode:o}.wav"));
            std::fs::write(&path, b"old").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();

            write_atomic(&path, b"new").unwrap();

            assert_eq!(mode_of(&path), mode);
            assert_eq!(std::fs::read(&path).unwrap(), b"new");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_follows_umask() {
        let temp_dir = TempDir::new().unwrap();
        // A plainly created file shows what the umask yields.
        let reference = temp_dir.path().join("reference");
        std::fs::File::create(&reference).unwrap();
        let path = temp_dir.path().join("speech.wav");

        write_atomic(&path, b"RIFF").unwrap();

        assert_eq!(mode_of(&path), mode_of(&reference));
    }
}
