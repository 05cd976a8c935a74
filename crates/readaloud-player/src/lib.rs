//! Playback queue coordinator for readaloud.
//!
//! Turns an ordered list of sentences into smoothly sequenced audio
//! playback: upcoming sentences are pre-generated ahead of the playhead,
//! user-driven interruptions (pause, skip, stop, reload) cancel in-flight
//! work through a monotonic playback epoch, and two structurally different
//! backends — local decode-and-play with a push completion callback, and
//! an OS media session that must be polled — feed one debounced
//! advance-on-finish path.
//!
//! The port traits this crate drives are defined in `readaloud-core`;
//! default implementations for segmentation ([`DefaultSegmenter`]), audio
//! persistence ([`FileAudioCache`]), and local playback
//! ([`RodioAudioBackend`]) ship here.

pub mod backend;
pub mod cache;
pub mod config;
pub mod controller;
pub mod epoch;
pub mod error;
pub mod generation;
pub mod local_audio;
pub mod segment;
pub mod store;

// Re-export key types for convenience
pub use backend::{AdvanceGate, BackendKind};
pub use cache::FileAudioCache;
pub use config::PlayerConfig;
pub use controller::{PlaybackController, PlayerPorts, spawn_event_bridge};
pub use epoch::{EpochStamp, PlaybackEpoch};
pub use error::PlayerError;
pub use generation::GenerationCoordinator;
pub use local_audio::RodioAudioBackend;
pub use segment::DefaultSegmenter;
pub use store::PlaybackStore;
