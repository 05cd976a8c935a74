//! Local decode-and-play backend port (the "push" backend).

use crate::domain::DecodedAudio;

/// Callback invoked when playback finishes naturally (audio drained).
pub type PlaybackDoneCallback = Box<dyn FnOnce() + Send + 'static>;

/// Errors from the local audio backend.
#[derive(Debug, thiserror::Error)]
pub enum LocalAudioError {
    /// Failed to decode the audio payload.
    #[error("Failed to decode audio: {0}")]
    DecodeFailed(String),

    /// Failed to open or drive the output stream.
    #[error("Failed to open audio output stream: {0}")]
    OutputStreamError(String),
}

/// Local decode-and-play audio output.
///
/// Completion is reported by direct invocation of the `on_finished`
/// callback, exactly once per successful `play` call — and never after
/// `stop` has cut playback short. No polling is required for this
/// backend.
pub trait LocalAudioPort: Send + Sync {
    /// Decode encoded WAV bytes into PCM suitable for playback.
    fn decode(&self, wav_bytes: &[u8]) -> Result<DecodedAudio, LocalAudioError>;

    /// Start playing decoded audio. `on_finished` fires once on natural
    /// completion.
    fn play(
        &self,
        audio: DecodedAudio,
        on_finished: PlaybackDoneCallback,
    ) -> Result<(), LocalAudioError>;

    /// Pause the current playback, keeping position.
    fn pause(&self);

    /// Resume a paused playback in place.
    fn resume(&self);

    /// Stop playback immediately, discarding the pending completion
    /// callback.
    fn stop(&self);
}
