//! Canonical event union emitted by the player.
//!
//! This module is the single source of truth for events delivered to
//! frontends (Tauri listeners, SSE handlers, CLI output). Events are
//! serialized with a `type` tag for TypeScript compatibility:
//!
//! ```json
//! { "type": "sentence_changed", "index": 2, "status": "ready" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{SentenceStatus, TransportState};

/// Events emitted by the playback controller to the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// A new sentence sequence was loaded.
    SentencesLoaded {
        /// Number of sentences in the new sequence.
        count: usize,
    },

    /// A sentence's status changed.
    SentenceChanged {
        /// Queue position of the sentence.
        index: usize,
        /// New status.
        status: SentenceStatus,
    },

    /// The transport state or current index changed.
    TransportChanged {
        /// New transport state.
        state: TransportState,
        /// Current sentence index, if any.
        #[serde(rename = "currentIndex")]
        current_index: Option<usize>,
    },

    /// Playback of the queue started (first sentence about to play).
    PlaybackStarted,

    /// Playback finished — the queue ran out or was stopped.
    PlaybackFinished,

    /// A non-fatal error was absorbed into per-sentence state.
    Error {
        /// Error description.
        message: String,
    },
}
