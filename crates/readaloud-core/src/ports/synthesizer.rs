//! Speech synthesis port.

use crate::domain::{SynthesisAudio, SynthesisRequest};

/// Errors reported by a synthesis engine.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The engine is not initialised (models missing or still loading).
    #[error("Synthesis engine not ready: {0}")]
    NotReady(String),

    /// The engine failed to synthesize the given text.
    #[error("Synthesis failed: {0}")]
    Failed(String),
}

/// Backend-agnostic speech synthesis engine.
///
/// Implementations must be `Send + Sync` so the coordinator can hold them
/// behind an `Arc` and call them from spawned tasks. The engine must
/// tolerate concurrent calls for distinct sentence indices; the generation
/// coordinator guarantees at most one in-flight request per index.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize a single sentence to audio.
    ///
    /// # Returns
    /// Encoded WAV bytes plus the spoken duration.
    async fn synthesize(&self, request: &SynthesisRequest)
    -> Result<SynthesisAudio, SynthesisError>;
}
