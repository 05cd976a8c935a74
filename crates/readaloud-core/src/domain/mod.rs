//! Domain model for the read-aloud queue.
//!
//! # Structure
//!
//! - `sentence` - Sentence records and their status lifecycle
//! - `synthesis` - Synthesis request/response payloads
//! - `snapshot` - UI-safe read-only views of playback state
//! - `voices` - Voice style and language catalogs

mod sentence;
mod snapshot;
mod synthesis;
mod voices;

pub use sentence::{Sentence, SentenceAudio, SentenceStatus};
pub use snapshot::{PlaybackSnapshot, SentenceSnapshot, TransportState};
pub use synthesis::{DecodedAudio, SynthesisAudio, SynthesisRequest};
pub use voices::{VoiceGender, VoiceInfo, VoiceStyleId, available_languages, available_voices};
