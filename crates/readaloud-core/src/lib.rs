//! Core domain types and port definitions for readaloud.
//!
//! This crate is adapter-free: it defines the sentence/transport domain
//! model, the port traits that external collaborators (synthesis engine,
//! audio output, media session, persistence) implement, and the event
//! union consumed by frontends. The playback coordinator itself lives in
//! `readaloud-player`.

pub mod domain;
pub mod events;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    DecodedAudio, PlaybackSnapshot, Sentence, SentenceAudio, SentenceSnapshot, SentenceStatus,
    SynthesisAudio, SynthesisRequest, TransportState, VoiceGender, VoiceInfo, VoiceStyleId,
    available_languages, available_voices,
};
pub use events::PlayerEvent;
pub use ports::{
    AudioStore, AudioStoreError, LocalAudioError, LocalAudioPort, MediaMetadata,
    MediaSessionAction, MediaSessionError, MediaSessionPort, MediaSessionState, NoopEmitter,
    PlaybackDoneCallback, PlayerEventEmitter, SegmentationError, SentenceSegmenter,
    SpeechSynthesizer, SynthesisError,
};
