//! OS media-session backend port (the "poll" backend).

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Errors from the media-session backend.
#[derive(Debug, thiserror::Error)]
pub enum MediaSessionError {
    /// The host environment does not expose a media session.
    #[error("Media session unavailable: {0}")]
    Unavailable(String),

    /// A media-session operation failed.
    #[error("Media session operation failed: {0}")]
    OperationFailed(String),
}

/// Track metadata shown in the OS media notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    /// Title line (typically the sentence text, truncated).
    pub title: String,

    /// Artist/source line (e.g. the document name).
    pub artist: String,
}

/// Playback state reported by the media session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSessionState {
    /// Whether the session is currently producing audio.
    pub is_playing: bool,
}

/// Transport actions delivered from hardware/notification controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSessionAction {
    Play,
    Pause,
    Next,
    Previous,
    Stop,
}

/// External/OS-level media playback session.
///
/// This backend offers no direct finish event: the caller polls
/// [`query_state`](MediaSessionPort::query_state) at a fixed interval and
/// infers completion when `is_playing` drops while playback should be
/// ongoing. Hardware control events arrive on the channel returned by
/// [`subscribe_actions`](MediaSessionPort::subscribe_actions).
#[async_trait::async_trait]
pub trait MediaSessionPort: Send + Sync {
    /// Start playing a persisted audio resource.
    async fn play(&self, url: &str, metadata: &MediaMetadata) -> Result<(), MediaSessionError>;

    /// Pause the session.
    async fn pause(&self) -> Result<(), MediaSessionError>;

    /// Resume a paused session.
    async fn resume(&self) -> Result<(), MediaSessionError>;

    /// Stop the session and dismiss the notification.
    async fn stop(&self) -> Result<(), MediaSessionError>;

    /// Query the current playback state.
    async fn query_state(&self) -> Result<MediaSessionState, MediaSessionError>;

    /// Obtain the stream of hardware/notification control actions.
    ///
    /// Called once by the controller; subsequent calls may return `None`
    /// if the implementation only supports a single subscriber.
    fn subscribe_actions(&self) -> Option<mpsc::UnboundedReceiver<MediaSessionAction>>;
}
