//! Snapshot DTOs for observer/frontend consumption.
//!
//! These types are "UI safe" - Clone + Debug + Serialize + Deserialize with
//! no infrastructure dependencies. They carry everything a frontend needs to
//! render sentence statuses, transport state, and progress, without exposing
//! the mutable playback state itself.

use serde::{Deserialize, Serialize};

use super::sentence::{Sentence, SentenceStatus};

/// Coarse transport state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportState {
    /// No sentence selected; nothing is playing.
    Stopped,

    /// Actively playing through the queue.
    Playing,

    /// Playback suspended mid-sentence; resumable in place.
    Paused,
}

/// Read-only view of a single sentence for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceSnapshot {
    /// Position in the queue.
    pub index: usize,

    /// Source text.
    pub text: String,

    /// Current status.
    pub status: SentenceStatus,

    /// Audio duration in seconds, once synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,

    /// Whether a persisted media URL exists (media-session eligible).
    pub has_media_url: bool,

    /// Failure message when `status == Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Sentence> for SentenceSnapshot {
    fn from(s: &Sentence) -> Self {
        Self {
            index: s.index,
            text: s.text.clone(),
            status: s.status,
            duration_secs: s.audio.as_ref().map(|a| a.duration.as_secs_f64()),
            has_media_url: s.media_url.is_some(),
            error: s.error.clone(),
        }
    }
}

/// Snapshot of the entire playback queue for API responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    /// Sentences in playback order.
    pub sentences: Vec<SentenceSnapshot>,

    /// Index of the current sentence; `None` when fully stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,

    /// Whether the transport is in `Playing` or `Paused`.
    pub is_playing: bool,

    /// Whether playback is paused (only meaningful while playing).
    pub is_paused: bool,

    /// Whether a load is in progress.
    pub is_loading: bool,

    /// Width of the pre-generation window.
    pub lookahead: usize,
}

impl PlaybackSnapshot {
    /// Derive the coarse transport state.
    #[must_use]
    pub const fn transport(&self) -> TransportState {
        if !self.is_playing {
            TransportState::Stopped
        } else if self.is_paused {
            TransportState::Paused
        } else {
            TransportState::Playing
        }
    }

    /// Number of sentences in the queue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Count sentences with the given status.
    #[must_use]
    pub fn count_with_status(&self, status: SentenceStatus) -> usize {
        self.sentences.iter().filter(|s| s.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_derivation() {
        let mut snap = PlaybackSnapshot::default();
        assert_eq!(snap.transport(), TransportState::Stopped);

        snap.is_playing = true;
        assert_eq!(snap.transport(), TransportState::Playing);

        snap.is_paused = true;
        assert_eq!(snap.transport(), TransportState::Paused);
    }

    #[test]
    fn sentence_snapshot_from_record() {
        let s = Sentence::new(3, "Some text.".to_string());
        let snap = SentenceSnapshot::from(&s);
        assert_eq!(snap.index, 3);
        assert_eq!(snap.status, SentenceStatus::Pending);
        assert!(snap.duration_secs.is_none());
        assert!(!snap.has_media_url);
    }

    #[test]
    fn serialization_roundtrip() {
        let snap = PlaybackSnapshot {
            sentences: vec![SentenceSnapshot {
                index: 0,
                text: "A.".to_string(),
                status: SentenceStatus::Ready,
                duration_secs: Some(1.5),
                has_media_url: true,
                error: None,
            }],
            current_index: Some(0),
            is_playing: true,
            is_paused: false,
            is_loading: false,
            lookahead: 3,
        };

        let json = serde_json::to_string(&snap).unwrap();
        let parsed: PlaybackSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.current_index, Some(0));
        assert_eq!(parsed.count_with_status(SentenceStatus::Ready), 1);
    }
}
