//! Generation coordinator — requests and tracks per-sentence synthesis.
//!
//! Enforces at most one in-flight synthesis request per sentence index and
//! drives the bounded lookahead window. All failures are absorbed into the
//! sentence's status; nothing propagates past this module's boundary.
//!
//! # Locking discipline
//!
//! Both locks are std mutexes and are never held across an `.await` point.
//! When both are needed, `in_flight` is taken before `store`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use readaloud_core::{
    AudioStore, PlayerEvent, SentenceAudio, SentenceStatus, SpeechSynthesizer, SynthesisRequest,
};

use crate::config::PlayerConfig;
use crate::epoch::{EpochStamp, PlaybackEpoch};
use crate::store::PlaybackStore;

/// Coordinates speech synthesis for the playback queue.
pub struct GenerationCoordinator {
    store: Arc<Mutex<PlaybackStore>>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_store: Arc<dyn AudioStore>,
    epoch: PlaybackEpoch,
    config: PlayerConfig,
    event_tx: mpsc::UnboundedSender<PlayerEvent>,

    /// In-flight markers, keyed by sentence index and stamped with the
    /// epoch that claimed them. Stamping means a stale completion never
    /// evicts a successor's claim for the same index.
    in_flight: Mutex<HashMap<usize, EpochStamp>>,
}

impl GenerationCoordinator {
    /// Create a coordinator sharing the controller's store and epoch.
    pub fn new(
        store: Arc<Mutex<PlaybackStore>>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio_store: Arc<dyn AudioStore>,
        epoch: PlaybackEpoch,
        config: PlayerConfig,
        event_tx: mpsc::UnboundedSender<PlayerEvent>,
    ) -> Self {
        Self {
            store,
            synthesizer,
            audio_store,
            epoch,
            config,
            event_tx,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Number of synthesis requests currently in flight.
    #[must_use]
    pub fn in_flight_len(&self) -> usize {
        self.in_flight.lock().unwrap().len()
    }

    /// Drop all in-flight bookkeeping (called on load).
    ///
    /// The synthesis calls themselves keep running; their results are
    /// discarded by the epoch check on arrival.
    pub fn clear_in_flight(&self) {
        self.in_flight.lock().unwrap().clear();
    }

    /// Request synthesis for one sentence.
    ///
    /// No-op when the index is out of range, already generating, already
    /// ready, or terminally failed. Resolves to whether the sentence ended
    /// up playable (`Ready` or later).
    pub async fn request_generation(&self, index: usize, stamp: EpochStamp) -> bool {
        if !self.epoch.is_current(stamp) {
            // Scheduled before a stop/skip/load; never touch the fresh
            // sequence.
            return false;
        }

        let Some(request) = self.claim(index, stamp) else {
            // Claimed elsewhere, terminal, or already playable.
            return matches!(
                self.store.lock().unwrap().status(index),
                Some(SentenceStatus::Ready | SentenceStatus::Playing | SentenceStatus::Played)
            );
        };

        self.emit_status(index, SentenceStatus::Generating);
        tracing::debug!(index, chars = request.text.len(), "Requesting synthesis");

        let result = self.synthesizer.synthesize(&request).await;
        self.release(index, stamp);

        if !self.epoch.is_current(stamp) {
            // A stop/skip/load happened while synthesis ran. Discard the
            // result; if the record still shows our Generating mark and no
            // successor has claimed the index, put it back to Pending so a
            // later play can re-request it.
            self.reset_abandoned(index);
            tracing::debug!(index, "Discarding stale synthesis result");
            return false;
        }

        match result {
            Ok(audio) => {
                let media_url = match self.audio_store.store(index, &audio.wav_bytes) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        // Non-fatal: the sentence stays playable through the
                        // local backend.
                        tracing::warn!(index, error = %e, "Audio persistence failed");
                        None
                    }
                };

                let stored = {
                    let mut store = self.store.lock().unwrap();
                    store.sentence_mut(index).is_some_and(|sentence| {
                        sentence.audio = Some(SentenceAudio {
                            payload: Arc::new(audio.wav_bytes),
                            duration: audio.duration,
                        });
                        sentence.media_url = media_url;
                        sentence.status = SentenceStatus::Ready;
                        true
                    })
                };

                if stored {
                    self.emit_status(index, SentenceStatus::Ready);
                    tracing::debug!(
                        index,
                        duration_ms = audio.duration.as_millis(),
                        "Sentence ready"
                    );
                }
                stored
            }
            Err(e) => {
                let message = e.to_string();
                {
                    let mut store = self.store.lock().unwrap();
                    if let Some(sentence) = store.sentence_mut(index) {
                        sentence.status = SentenceStatus::Error;
                        sentence.error = Some(message.clone());
                    }
                }
                self.emit_status(index, SentenceStatus::Error);
                let _ = self.event_tx.send(PlayerEvent::Error {
                    message: format!("sentence {index}: {message}"),
                });
                tracing::warn!(index, error = %message, "Synthesis failed");
                false
            }
        }
    }

    /// Pre-generate the window `[from, from + lookahead]`, clamped to the
    /// sequence length.
    ///
    /// Non-blocking and idempotent: sentences already generating, ready,
    /// playing, played, or failed are skipped, and repeated calls issue no
    /// duplicate requests — the in-flight map enforces that, not caller
    /// discipline.
    pub fn trigger_lookahead(self: &Arc<Self>, from: usize, stamp: EpochStamp) {
        let (lookahead, len) = {
            let store = self.store.lock().unwrap();
            (store.lookahead, store.len())
        };

        if len == 0 || from >= len {
            return;
        }
        let end = (from + lookahead).min(len - 1);

        for index in from..=end {
            let is_pending = {
                let store = self.store.lock().unwrap();
                store.status(index) == Some(SentenceStatus::Pending)
            };
            if !is_pending {
                continue;
            }

            let coordinator = Arc::clone(self);
            tokio::spawn(async move {
                coordinator.request_generation(index, stamp).await;
            });
        }
    }

    // ── Internal helpers ───────────────────────────────────────────

    /// Claim the in-flight marker for `index` and mark it `Generating`.
    ///
    /// Returns the synthesis request to issue, or `None` when the sentence
    /// is not in a claimable state.
    fn claim(&self, index: usize, stamp: EpochStamp) -> Option<SynthesisRequest> {
        let mut in_flight = self.in_flight.lock().unwrap();
        let mut store = self.store.lock().unwrap();

        match store.status(index)? {
            SentenceStatus::Pending => {}
            _ => return None,
        }
        if in_flight.contains_key(&index) {
            return None;
        }

        in_flight.insert(index, stamp);
        let sentence = store.sentence_mut(index)?;
        sentence.status = SentenceStatus::Generating;
        sentence.error = None;

        Some(SynthesisRequest {
            text: sentence.text.clone(),
            sentence_index: index,
            language: self.config.language.clone(),
            voice_style: self.config.voice_style.clone(),
            quality_steps: self.config.quality_steps,
            speed: self.config.speed,
        })
    }

    /// Release the in-flight marker, but only if it is still ours.
    fn release(&self, index: usize, stamp: EpochStamp) {
        let mut in_flight = self.in_flight.lock().unwrap();
        if in_flight.get(&index) == Some(&stamp) {
            in_flight.remove(&index);
        }
    }

    /// Reset an abandoned `Generating` record back to `Pending` unless a
    /// successor epoch has already re-claimed the index.
    fn reset_abandoned(&self, index: usize) {
        let in_flight = self.in_flight.lock().unwrap();
        if in_flight.contains_key(&index) {
            return;
        }
        let mut store = self.store.lock().unwrap();
        if let Some(sentence) = store.sentence_mut(index)
            && sentence.status == SentenceStatus::Generating
        {
            sentence.status = SentenceStatus::Pending;
        }
    }

    fn emit_status(&self, index: usize, status: SentenceStatus) {
        let _ = self
            .event_tx
            .send(PlayerEvent::SentenceChanged { index, status });
    }
}

impl std::fmt::Debug for GenerationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationCoordinator")
            .field("in_flight", &self.in_flight_len())
            .finish_non_exhaustive()
    }
}
