//! Filesystem audio cache — persists synthesized WAV files for the
//! media-session backend.
//!
//! The OS media session plays from URLs, not from in-memory buffers, so
//! each synthesized sentence is written to `sentence_{index}.wav` under a
//! cache directory and referenced by a `file://` URL. The cache is cleared
//! on every load; files are never reused across sequences.

use std::path::PathBuf;

use readaloud_core::{AudioStore, AudioStoreError};

/// Audio cache rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FileAudioCache {
    dir: PathBuf,
}

impl FileAudioCache {
    /// Create a cache rooted at `dir`. The directory is created lazily on
    /// the first store.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache directory.
    #[must_use]
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn file_path(&self, sentence_index: usize) -> PathBuf {
        self.dir.join(format!("sentence_{sentence_index}.wav"))
    }
}

impl AudioStore for FileAudioCache {
    fn store(&self, sentence_index: usize, wav_bytes: &[u8]) -> Result<String, AudioStoreError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| AudioStoreError::WriteFailed(format!("create cache dir: {e}")))?;

        let path = self.file_path(sentence_index);
        std::fs::write(&path, wav_bytes)
            .map_err(|e| AudioStoreError::WriteFailed(format!("{}: {e}", path.display())))?;

        tracing::debug!(
            index = sentence_index,
            bytes = wav_bytes.len(),
            path = %path.display(),
            "Cached sentence audio"
        );

        Ok(format!("file://{}", path.to_string_lossy()))
    }

    fn clear(&self) -> Result<(), AudioStoreError> {
        if self.dir.exists() {
            std::fs::remove_dir_all(&self.dir)
                .map_err(|e| AudioStoreError::ClearFailed(e.to_string()))?;
            tracing::debug!(dir = %self.dir.display(), "Audio cache cleared");
        }
        Ok(())
    }
}
