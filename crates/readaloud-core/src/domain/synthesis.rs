//! Synthesis request/response payloads crossing the synthesizer port.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A request to synthesize a single sentence.
///
/// The engine must tolerate concurrent requests for distinct indices; the
/// caller guarantees at most one in-flight request per index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    /// Text to synthesize (a single sentence).
    pub text: String,

    /// Queue position of the sentence, echoed back for correlation.
    pub sentence_index: usize,

    /// Language code (e.g. `"en"`).
    pub language: String,

    /// Voice style identifier (e.g. `"F1"`).
    pub voice_style: String,

    /// Number of diffusion/refinement steps — higher is slower but cleaner.
    pub quality_steps: usize,

    /// Speech rate multiplier (1.0 = normal).
    pub speed: f32,
}

/// Audio produced by a successful synthesis call.
#[derive(Debug, Clone)]
pub struct SynthesisAudio {
    /// Encoded WAV bytes.
    pub wav_bytes: Vec<u8>,

    /// Duration of the synthesized speech.
    pub duration: Duration,
}

/// PCM audio decoded by the local playback backend.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// PCM f32 samples, mono.
    pub samples: Vec<f32>,

    /// Sample rate of the audio (e.g. 24 000 Hz).
    pub sample_rate: u32,

    /// Duration of the audio.
    pub duration: Duration,
}
