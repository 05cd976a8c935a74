//! Player error types.

/// Errors that can occur in the playback coordinator.
///
/// Only segmentation failures propagate out of `load`; every other failure
/// is absorbed into per-sentence state and observed through snapshots and
/// events.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// Splitting the source text into sentences failed.
    #[error("Sentence segmentation failed: {0}")]
    Segmentation(String),

    /// Speech synthesis failed for a sentence.
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// Persisting synthesized audio failed.
    #[error("Failed to persist audio: {0}")]
    AudioStore(String),

    /// The local playback backend failed.
    #[error("Local audio backend failed: {0}")]
    LocalAudio(String),

    /// The media-session backend failed.
    #[error("Media session backend failed: {0}")]
    MediaSession(String),

    /// No sentences are loaded.
    #[error("No sentences loaded")]
    NoSentences,

    /// IO error (audio cache files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<readaloud_core::SegmentationError> for PlayerError {
    fn from(e: readaloud_core::SegmentationError) -> Self {
        Self::Segmentation(e.0)
    }
}

impl From<readaloud_core::SynthesisError> for PlayerError {
    fn from(e: readaloud_core::SynthesisError) -> Self {
        Self::Synthesis(e.to_string())
    }
}

impl From<readaloud_core::AudioStoreError> for PlayerError {
    fn from(e: readaloud_core::AudioStoreError) -> Self {
        Self::AudioStore(e.to_string())
    }
}

impl From<readaloud_core::LocalAudioError> for PlayerError {
    fn from(e: readaloud_core::LocalAudioError) -> Self {
        Self::LocalAudio(e.to_string())
    }
}

impl From<readaloud_core::MediaSessionError> for PlayerError {
    fn from(e: readaloud_core::MediaSessionError) -> Self {
        Self::MediaSession(e.to_string())
    }
}
