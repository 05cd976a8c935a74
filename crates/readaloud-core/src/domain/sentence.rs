//! Sentence records — the atomic unit of the read-aloud queue.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a sentence in the queue.
///
/// Transitions are acyclic except for two explicit resets performed by the
/// controller on stop/skip: `Playing`/`Played` go back to `Ready` when the
/// audio is cached, or `Pending` when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceStatus {
    /// Not yet submitted for synthesis.
    Pending,

    /// A synthesis request is in flight.
    Generating,

    /// Audio is available and the sentence can be played.
    Ready,

    /// Currently being played back. At most one sentence holds this status.
    Playing,

    /// Playback of this sentence completed.
    Played,

    /// Synthesis failed — terminal until the next full load.
    Error,
}

/// Synthesized audio attached to a sentence once generation succeeds.
///
/// The payload is the encoded WAV bytes as returned by the synthesis
/// engine; decoding happens at play time in the local audio backend. The
/// bytes are shared via `Arc` so cloning a sentence (for snapshots or
/// backend dispatch) never copies audio data.
#[derive(Debug, Clone)]
pub struct SentenceAudio {
    /// Encoded WAV payload.
    pub payload: Arc<Vec<u8>>,

    /// Duration of the audio as reported by synthesis.
    pub duration: Duration,
}

/// An ordered unit of text to be spoken.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Stable, 0-based position in the playback sequence.
    pub index: usize,

    /// Source text.
    pub text: String,

    /// Current lifecycle status.
    pub status: SentenceStatus,

    /// Decoded-audio handle, present only once `Ready` (or later).
    pub audio: Option<SentenceAudio>,

    /// Persisted-resource reference usable by the media-session backend.
    /// May be absent even when audio is cached, if persistence failed.
    pub media_url: Option<String>,

    /// Last failure message, present only when `status == Error`.
    pub error: Option<String>,
}

impl Sentence {
    /// Create a new pending sentence.
    #[must_use]
    pub const fn new(index: usize, text: String) -> Self {
        Self {
            index,
            text,
            status: SentenceStatus::Pending,
            audio: None,
            media_url: None,
            error: None,
        }
    }

    /// Whether synthesized audio is cached for this sentence.
    #[must_use]
    pub const fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Reset a `Playing`/`Played` sentence as part of stop/skip.
    ///
    /// Goes back to `Ready` when audio is cached, `Pending` otherwise.
    /// Other statuses are left untouched.
    pub fn reset_after_playback(&mut self) {
        if matches!(
            self.status,
            SentenceStatus::Playing | SentenceStatus::Played
        ) {
            self.status = if self.has_audio() {
                SentenceStatus::Ready
            } else {
                SentenceStatus::Pending
            };
        }
    }
}
