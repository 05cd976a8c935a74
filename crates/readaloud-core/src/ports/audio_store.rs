//! Audio persistence port.

/// Errors from the persistence capability.
#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    /// Failed to write the audio resource.
    #[error("Failed to persist audio: {0}")]
    WriteFailed(String),

    /// Failed to clear persisted resources.
    #[error("Failed to clear audio store: {0}")]
    ClearFailed(String),
}

/// Persists synthesized audio and hands back an opaque reference.
///
/// The returned reference (typically a URL) is what the media-session
/// backend plays from. Persistence may fail independently of synthesis
/// success; the coordinator treats that as non-fatal — the sentence stays
/// playable through the local backend.
pub trait AudioStore: Send + Sync {
    /// Persist the WAV bytes for a sentence, returning a playable reference.
    fn store(&self, sentence_index: usize, wav_bytes: &[u8]) -> Result<String, AudioStoreError>;

    /// Remove all persisted audio (called on reload).
    fn clear(&self) -> Result<(), AudioStoreError>;
}
