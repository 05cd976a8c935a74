//! Port definitions — trait boundaries to external collaborators.
//!
//! Every external dependency of the playback coordinator crosses one of
//! these traits: the synthesis engine, the sentence segmenter, audio
//! persistence, the two playback backends, and the event sink. Adapters
//! implement them; the coordinator only ever sees trait objects.

mod audio_store;
mod event_emitter;
mod local_audio;
mod media_session;
mod segmenter;
mod synthesizer;

pub use audio_store::{AudioStore, AudioStoreError};
pub use event_emitter::{NoopEmitter, PlayerEventEmitter};
pub use local_audio::{LocalAudioError, LocalAudioPort, PlaybackDoneCallback};
pub use media_session::{
    MediaMetadata, MediaSessionAction, MediaSessionError, MediaSessionPort, MediaSessionState,
};
pub use segmenter::{SegmentationError, SentenceSegmenter};
pub use synthesizer::{SpeechSynthesizer, SynthesisError};
