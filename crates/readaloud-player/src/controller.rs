//! Playback controller — the orchestrating state machine.
//!
//! Owns all transport state transitions, drives the generation
//! coordinator's lookahead, selects and drives a playback backend per
//! sentence, and performs auto-advance:
//!
//! ```text
//!   Stopped ──play()──▶ Playing ──pause()──▶ Paused
//!      ▲                   │  ▲                │
//!      └──stop()/queue end─┘  └────play()──────┘
//! ```
//!
//! Every asynchronous continuation is stamped with the playback epoch at
//! scheduling time; a stop, skip, load, or fresh play bumps the epoch and
//! thereby cancels everything previously in flight.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;

use readaloud_core::{
    AudioStore, LocalAudioPort, MediaMetadata, MediaSessionAction, MediaSessionPort,
    PlaybackSnapshot, PlayerEvent, PlayerEventEmitter, SentenceStatus, SentenceSegmenter,
    SpeechSynthesizer, TransportState,
};

use crate::backend::{AdvanceGate, BackendKind, FinishSignal, spawn_poll_watcher};
use crate::config::PlayerConfig;
use crate::epoch::{EpochStamp, PlaybackEpoch};
use crate::error::PlayerError;
use crate::generation::GenerationCoordinator;
use crate::store::PlaybackStore;

/// Maximum characters of sentence text shown in the media notification.
const MEDIA_TITLE_MAX_CHARS: usize = 80;

// ── Ports bundle ───────────────────────────────────────────────────

/// External collaborators handed to the controller at construction.
pub struct PlayerPorts {
    /// Speech synthesis engine.
    pub synthesizer: Arc<dyn SpeechSynthesizer>,

    /// Sentence segmenter used by `load`.
    pub segmenter: Arc<dyn SentenceSegmenter>,

    /// Persistence capability for the media-session backend.
    pub audio_store: Arc<dyn AudioStore>,

    /// Local decode-and-play backend.
    pub local_audio: Arc<dyn LocalAudioPort>,

    /// OS media session, when the host environment exposes one.
    pub media_session: Option<Arc<dyn MediaSessionPort>>,
}

/// The sentence currently being driven by a backend.
#[derive(Debug, Clone, Copy)]
struct ActivePlayback {
    index: usize,
    backend: BackendKind,
}

// ── Controller ─────────────────────────────────────────────────────

/// The playback queue controller.
///
/// Cheap to clone-share via its internal `Arc`; all methods take `&self`.
pub struct PlaybackController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    store: Arc<Mutex<PlaybackStore>>,
    epoch: PlaybackEpoch,
    config: PlayerConfig,
    generation: Arc<GenerationCoordinator>,
    segmenter: Arc<dyn SentenceSegmenter>,
    audio_store: Arc<dyn AudioStore>,
    local_audio: Arc<dyn LocalAudioPort>,
    media_session: Option<Arc<dyn MediaSessionPort>>,
    event_tx: mpsc::UnboundedSender<PlayerEvent>,
    advance_gate: AdvanceGate,
    finish_tx: mpsc::UnboundedSender<FinishSignal>,

    /// The sentence a backend is actively driving, if any. Uses a std
    /// mutex — never held across an `.await` point.
    active: Mutex<Option<ActivePlayback>>,
}

impl PlaybackController {
    /// Create a controller wired to the given ports.
    ///
    /// Returns the controller and a receiver for [`PlayerEvent`]s. If the
    /// media session exposes hardware control actions, they are bridged
    /// onto the controller's own operations automatically.
    ///
    /// Must be called from within a Tokio runtime — the advance consumer
    /// and action bridge are spawned here.
    #[must_use]
    pub fn new(
        ports: PlayerPorts,
        config: PlayerConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PlayerEvent>) {
        let config = config.sanitized();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (finish_tx, finish_rx) = mpsc::unbounded_channel();

        let store = Arc::new(Mutex::new(PlaybackStore::new(config.lookahead)));
        let epoch = PlaybackEpoch::new();

        let generation = Arc::new(GenerationCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&ports.synthesizer),
            Arc::clone(&ports.audio_store),
            epoch.clone(),
            config.clone(),
            event_tx.clone(),
        ));

        let inner = Arc::new(ControllerInner {
            store,
            epoch,
            advance_gate: AdvanceGate::new(config.advance_debounce),
            config,
            generation,
            segmenter: ports.segmenter,
            audio_store: ports.audio_store,
            local_audio: ports.local_audio,
            media_session: ports.media_session,
            event_tx,
            finish_tx,
            active: Mutex::new(None),
        });

        inner.spawn_finish_consumer(finish_rx);
        inner.spawn_action_bridge();

        (Self { inner }, event_rx)
    }

    /// Segment `text` and replace the queue with the resulting sentences.
    ///
    /// Invalidates everything in flight for the previous sequence. Returns
    /// the number of sentences loaded; segmentation failure leaves the
    /// queue empty and is the only error surfaced to callers.
    pub async fn load(&self, text: &str) -> Result<usize, PlayerError> {
        self.inner.load(text).await
    }

    /// Start playback, or resume it when paused.
    pub async fn play(&self) -> Result<(), PlayerError> {
        self.inner.play().await
    }

    /// Pause playback in place.
    pub async fn pause(&self) {
        self.inner.pause().await;
    }

    /// Stop playback entirely. Idempotent.
    pub async fn stop(&self) {
        self.inner.stop().await;
    }

    /// Jump to an arbitrary sentence. Out-of-range indices are a no-op.
    pub async fn skip_to(&self, index: usize) {
        self.inner.skip_to(index).await;
    }

    /// Advance to the next sentence (clamped to the end of the queue).
    pub async fn skip_forward(&self) {
        if let Some(target) = self.inner.clamped_target(SkipDirection::Forward) {
            self.inner.skip_to(target).await;
        }
    }

    /// Go back to the previous sentence.
    pub async fn skip_back(&self) {
        if let Some(target) = self.inner.clamped_target(SkipDirection::Back) {
            self.inner.skip_to(target).await;
        }
    }

    /// Read-only snapshot of the whole playback state.
    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.inner.store.lock().unwrap().snapshot()
    }

    /// Current coarse transport state.
    #[must_use]
    pub fn transport(&self) -> TransportState {
        let store = self.inner.store.lock().unwrap();
        transport_of(&store)
    }

    /// Number of synthesis requests currently in flight (observability).
    #[must_use]
    pub fn in_flight_generations(&self) -> usize {
        self.inner.generation.in_flight_len()
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        // Best-effort synchronous teardown: invalidate continuations and
        // cut local audio. The media session is stopped by its own Drop.
        self.inner.epoch.bump();
        self.inner.local_audio.stop();
    }
}

// ── Skip target computation ────────────────────────────────────────

enum SkipDirection {
    Forward,
    Back,
}

// ── Operations ─────────────────────────────────────────────────────

impl ControllerInner {
    async fn load(&self, text: &str) -> Result<usize, PlayerError> {
        let _stamp = self.epoch.bump();
        self.stop_backends().await;
        self.generation.clear_in_flight();
        self.advance_gate.reset();
        *self.active.lock().unwrap() = None;

        self.store.lock().unwrap().is_loading = true;

        if let Err(e) = self.audio_store.clear() {
            tracing::warn!(error = %e, "Failed to clear audio cache on load");
        }

        let segmented = self.segmenter.segment(text, &self.config.language);

        let result = {
            let mut store = self.store.lock().unwrap();
            store.is_loading = false;
            match segmented {
                Ok(sentences) => {
                    store.replace_sentences(sentences);
                    Ok(store.len())
                }
                Err(e) => {
                    store.replace_sentences(Vec::new());
                    Err(PlayerError::from(e))
                }
            }
        };

        match &result {
            Ok(count) => {
                tracing::info!(count, "Loaded sentence sequence");
                let _ = self
                    .event_tx
                    .send(PlayerEvent::SentencesLoaded { count: *count });
                self.emit_transport();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Load failed — queue left empty");
                let _ = self.event_tx.send(PlayerEvent::Error {
                    message: e.to_string(),
                });
            }
        }

        result
    }

    async fn play(self: &Arc<Self>) -> Result<(), PlayerError> {
        // Resume path: no epoch change, no re-dispatch of the current
        // sentence.
        let resume = {
            let mut store = self.store.lock().unwrap();
            if store.is_playing && store.is_paused {
                store.is_paused = false;
                true
            } else {
                false
            }
        };
        if resume {
            let active = *self.active.lock().unwrap();
            match active.map(|a| a.backend) {
                Some(BackendKind::Push) => self.local_audio.resume(),
                Some(BackendKind::Poll) => {
                    if let Some(ref session) = self.media_session
                        && let Err(e) = session.resume().await
                    {
                        tracing::warn!(error = %e, "Media session resume failed");
                    }
                }
                None => {
                    // Paused before any sentence was dispatched (e.g. while
                    // the first sentence was still generating) — re-enter
                    // the play chain under the current epoch.
                    let stamp = self.epoch.stamp();
                    if let Some(index) = self.store.lock().unwrap().current_index {
                        self.spawn_play_loop(index, stamp);
                    }
                }
            }
            tracing::debug!("Playback resumed");
            self.emit_transport();
            return Ok(());
        }

        // Start path: only valid from Stopped.
        let start = {
            let mut store = self.store.lock().unwrap();
            if store.is_playing {
                return Ok(()); // already playing and not paused
            }
            if store.is_empty() {
                return Err(PlayerError::NoSentences);
            }
            let start = store.current_index.unwrap_or(0);
            store.current_index = Some(start);
            store.is_playing = true;
            store.is_paused = false;
            start
        };

        let stamp = self.epoch.bump();
        tracing::info!(start, "Playback starting");
        let _ = self.event_tx.send(PlayerEvent::PlaybackStarted);
        self.emit_transport();
        // Warm the whole window immediately; the play loop re-requests the
        // current sentence if needed (idempotent).
        self.generation.trigger_lookahead(start, stamp);
        self.spawn_play_loop(start, stamp);
        Ok(())
    }

    async fn pause(&self) {
        let was_running = {
            let mut store = self.store.lock().unwrap();
            if store.is_playing && !store.is_paused {
                store.is_paused = true;
                true
            } else {
                false
            }
        };
        if !was_running {
            return;
        }

        let active = *self.active.lock().unwrap();
        match active.map(|a| a.backend) {
            Some(BackendKind::Push) => self.local_audio.pause(),
            Some(BackendKind::Poll) => {
                if let Some(ref session) = self.media_session
                    && let Err(e) = session.pause().await
                {
                    tracing::warn!(error = %e, "Media session pause failed");
                }
            }
            None => {}
        }

        tracing::debug!("Playback paused");
        self.emit_transport();
    }

    async fn stop(&self) {
        self.epoch.bump();
        self.stop_backends().await;

        let was_active = {
            let mut store = self.store.lock().unwrap();
            let was_active = store.is_playing || store.current_index.is_some();
            store.reset_all_sentences();
            store.is_playing = false;
            store.is_paused = false;
            store.current_index = None;
            was_active
        };

        *self.active.lock().unwrap() = None;
        self.advance_gate.reset();

        if was_active {
            tracing::info!("Playback stopped");
            self.emit_transport();
            let _ = self.event_tx.send(PlayerEvent::PlaybackFinished);
        }
    }

    async fn skip_to(self: &Arc<Self>, index: usize) {
        {
            let store = self.store.lock().unwrap();
            if !store.in_range(index) {
                tracing::debug!(index, len = store.len(), "Skip target out of range");
                return;
            }
        }

        let stamp = self.epoch.bump();
        self.stop_backends().await;

        let dispatch = {
            let mut store = self.store.lock().unwrap();
            if let Some(prev) = store.current_index {
                store.reset_sentence(prev);
                if let Some(status) = store.status(prev) {
                    let _ = self
                        .event_tx
                        .send(PlayerEvent::SentenceChanged { index: prev, status });
                }
            }
            store.current_index = Some(index);
            store.is_playing && !store.is_paused
        };

        *self.active.lock().unwrap() = None;
        self.advance_gate.reset();

        tracing::info!(index, dispatch, "Skipped to sentence");
        self.emit_transport();

        if dispatch {
            self.spawn_play_loop(index, stamp);
        }
    }

    fn clamped_target(&self, direction: SkipDirection) -> Option<usize> {
        let store = self.store.lock().unwrap();
        if store.is_empty() {
            return None;
        }
        let last = store.len() - 1;
        let target = match (direction, store.current_index) {
            (SkipDirection::Forward, Some(i)) => (i + 1).min(last),
            (SkipDirection::Back, Some(i)) => i.saturating_sub(1),
            // From fully stopped, both directions select the first sentence.
            (_, None) => 0,
        };
        Some(target)
    }

    // ── Play-at-index ──────────────────────────────────────────────

    fn spawn_play_loop(self: &Arc<Self>, start: usize, stamp: EpochStamp) {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            inner.play_loop(start, stamp).await;
        });
    }

    /// The play-at-index procedure, as an iterative epoch-guarded loop.
    ///
    /// Terminates by handing the sentence to a backend (whose completion
    /// re-enters via the finish path), by stopping playback at the end of
    /// the queue, or silently when the epoch moves on.
    async fn play_loop(self: Arc<Self>, start: usize, stamp: EpochStamp) {
        let mut index = start;
        let mut generating_wait = Duration::ZERO;

        loop {
            if !self.epoch.is_current(stamp) {
                return;
            }

            let status = {
                let store = self.store.lock().unwrap();
                if !store.is_playing || store.is_paused {
                    return;
                }
                match store.status(index) {
                    Some(status) => status,
                    None => return, // out of bounds
                }
            };

            // Duplicate-call guard: this sentence is already being driven.
            if self
                .active
                .lock()
                .unwrap()
                .is_some_and(|a| a.index == index)
            {
                return;
            }

            match status {
                SentenceStatus::Pending => {
                    self.generation.request_generation(index, stamp).await;
                    if !self.epoch.is_current(stamp) {
                        return;
                    }
                    // Re-enter with the updated status (Ready or Error).
                }

                SentenceStatus::Generating => {
                    tokio::time::sleep(self.config.generating_poll).await;
                    generating_wait += self.config.generating_poll;
                    if generating_wait >= self.config.generating_wait_cap
                        && self.epoch.is_current(stamp)
                    {
                        self.fail_sentence(index, "synthesis timed out");
                    }
                }

                SentenceStatus::Error => {
                    generating_wait = Duration::ZERO;
                    let next = index + 1;
                    let next_in_range = self.store.lock().unwrap().in_range(next);
                    if next_in_range {
                        tracing::debug!(index, "Skipping failed sentence");
                        self.store.lock().unwrap().current_index = Some(next);
                        self.emit_transport();
                        index = next;
                    } else {
                        self.finish_playback().await;
                        return;
                    }
                }

                SentenceStatus::Ready => {
                    if self.start_sentence(index, stamp).await {
                        return; // backend completion drives the advance
                    }
                    // Both backends refused — the sentence was marked
                    // failed; the Error arm advances on re-entry.
                }

                SentenceStatus::Playing => return,

                SentenceStatus::Played => {
                    // Reachable after a backwards skip across sentences that
                    // were never reset; apply the standard reset and replay.
                    self.store.lock().unwrap().reset_sentence(index);
                }
            }
        }
    }

    /// Mark `index` playing and hand it to a backend.
    ///
    /// Prefers the media session when one is configured and the sentence
    /// has a persisted URL; falls back to local playback for this sentence
    /// on a media-session play failure, without touching buffered audio.
    /// Returns `false` (with the sentence marked failed) when no backend
    /// accepted the audio.
    async fn start_sentence(self: &Arc<Self>, index: usize, stamp: EpochStamp) -> bool {
        let extracted = {
            let mut store = self.store.lock().unwrap();
            if !store.is_playing || store.is_paused {
                return false;
            }
            store.current_index = Some(index);
            store.sentence_mut(index).and_then(|sentence| {
                let audio = sentence.audio.clone()?;
                sentence.status = SentenceStatus::Playing;
                Some((
                    sentence.text.clone(),
                    audio.payload,
                    sentence.media_url.clone(),
                ))
            })
        };
        let Some((text, payload, media_url)) = extracted else {
            // Ready without cached audio should be unreachable; fail the
            // sentence rather than spinning on it.
            self.fail_sentence(index, "no cached audio for ready sentence");
            return false;
        };

        self.emit_sentence(index, SentenceStatus::Playing);
        self.emit_transport();

        // Keep the window ahead of the playhead warm.
        self.generation.trigger_lookahead(index, stamp);

        // Backend selection: media session first, local fallback.
        if let (Some(session), Some(url)) = (self.media_session.as_ref(), media_url) {
            let metadata = media_metadata(&text);
            match session.play(&url, &metadata).await {
                Ok(()) => {
                    *self.active.lock().unwrap() = Some(ActivePlayback {
                        index,
                        backend: BackendKind::Poll,
                    });
                    spawn_poll_watcher(
                        Arc::clone(session),
                        Arc::clone(&self.store),
                        self.epoch.clone(),
                        stamp,
                        index,
                        self.config.poll_interval,
                        self.finish_tx.clone(),
                    );
                    // A pause may have raced the async dispatch.
                    let paused_now = self.store.lock().unwrap().is_paused;
                    if paused_now && let Err(e) = session.pause().await {
                        tracing::warn!(error = %e, "Media session pause failed");
                    }
                    tracing::debug!(index, "Sentence playing via media session");
                    return true;
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Media session play failed — falling back to local audio");
                }
            }
        }

        match self.play_local(index, stamp, &payload) {
            Ok(()) => {
                *self.active.lock().unwrap() = Some(ActivePlayback {
                    index,
                    backend: BackendKind::Push,
                });
                if self.store.lock().unwrap().is_paused {
                    self.local_audio.pause();
                }
                tracing::debug!(index, "Sentence playing via local audio");
                true
            }
            Err(e) => {
                self.fail_sentence(index, &format!("playback failed: {e}"));
                false
            }
        }
    }

    /// Decode and start local playback; the finish callback reports back
    /// through the unified advance path.
    fn play_local(&self, index: usize, stamp: EpochStamp, payload: &[u8]) -> Result<(), PlayerError> {
        let decoded = self.local_audio.decode(payload)?;
        let finish_tx = self.finish_tx.clone();
        let on_finished = Box::new(move || {
            let _ = finish_tx.send(FinishSignal { index, stamp });
        });
        self.local_audio.play(decoded, on_finished)?;
        Ok(())
    }

    // ── Advance ────────────────────────────────────────────────────

    fn spawn_finish_consumer(self: &Arc<Self>, mut finish_rx: mpsc::UnboundedReceiver<FinishSignal>) {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(signal) = finish_rx.recv().await {
                inner.handle_finished(signal).await;
            }
        });
    }

    /// The single idempotent advance path, fed by both backends.
    async fn handle_finished(self: &Arc<Self>, signal: FinishSignal) {
        if !self.epoch.is_current(signal.stamp) {
            tracing::debug!(index = signal.index, "Ignoring stale finish report");
            return;
        }

        let Some(ticket) = self.advance_gate.try_begin() else {
            tracing::debug!(index = signal.index, "Advance suppressed by debounce");
            return;
        };

        let next = {
            let mut store = self.store.lock().unwrap();
            if store.current_index != Some(signal.index)
                || store.status(signal.index) != Some(SentenceStatus::Playing)
            {
                return; // uncommitted ticket: does not start the debounce window
            }
            if let Some(sentence) = store.sentence_mut(signal.index) {
                sentence.status = SentenceStatus::Played;
            }

            let next = signal.index + 1;
            if store.in_range(next) && store.is_playing && !store.is_paused {
                store.current_index = Some(next);
                Some(next)
            } else {
                store.is_playing = false;
                store.is_paused = false;
                store.current_index = None;
                None
            }
        };

        *self.active.lock().unwrap() = None;
        self.emit_sentence(signal.index, SentenceStatus::Played);
        ticket.commit();

        match next {
            Some(next) => {
                tracing::debug!(from = signal.index, to = next, "Auto-advancing");
                self.emit_transport();
                self.spawn_play_loop(next, signal.stamp);
            }
            None => {
                tracing::info!("Queue finished");
                self.emit_transport();
                let _ = self.event_tx.send(PlayerEvent::PlaybackFinished);
                self.stop_backends().await;
            }
        }
    }

    /// End playback from inside the play loop (failed last sentence).
    async fn finish_playback(&self) {
        {
            let mut store = self.store.lock().unwrap();
            store.is_playing = false;
            store.is_paused = false;
            store.current_index = None;
        }
        *self.active.lock().unwrap() = None;
        self.emit_transport();
        let _ = self.event_tx.send(PlayerEvent::PlaybackFinished);
        self.stop_backends().await;
    }

    // ── Hardware actions ───────────────────────────────────────────

    /// Bridge media-session hardware actions onto controller operations.
    fn spawn_action_bridge(self: &Arc<Self>) {
        let Some(mut actions) = self
            .media_session
            .as_ref()
            .and_then(|session| session.subscribe_actions())
        else {
            return;
        };

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(action) = actions.recv().await {
                tracing::debug!(?action, "Hardware media action");
                match action {
                    MediaSessionAction::Play => {
                        if let Err(e) = inner.play().await {
                            tracing::warn!(error = %e, "Hardware play action failed");
                        }
                    }
                    MediaSessionAction::Pause => inner.pause().await,
                    MediaSessionAction::Next => {
                        let target = inner.clamped_target(SkipDirection::Forward);
                        if let Some(target) = target {
                            inner.skip_to(target).await;
                        }
                    }
                    MediaSessionAction::Previous => {
                        let target = inner.clamped_target(SkipDirection::Back);
                        if let Some(target) = target {
                            inner.skip_to(target).await;
                        }
                    }
                    MediaSessionAction::Stop => inner.stop().await,
                }
            }
        });
    }

    // ── Helpers ────────────────────────────────────────────────────

    /// Eagerly stop both backends so external side effects cease promptly
    /// rather than merely being ignored.
    async fn stop_backends(&self) {
        self.local_audio.stop();
        if let Some(ref session) = self.media_session
            && let Err(e) = session.stop().await
        {
            tracing::warn!(error = %e, "Media session stop failed");
        }
    }

    fn fail_sentence(&self, index: usize, message: &str) {
        {
            let mut store = self.store.lock().unwrap();
            if let Some(sentence) = store.sentence_mut(index) {
                sentence.status = SentenceStatus::Error;
                sentence.error = Some(message.to_string());
            }
        }
        self.emit_sentence(index, SentenceStatus::Error);
        let _ = self.event_tx.send(PlayerEvent::Error {
            message: format!("sentence {index}: {message}"),
        });
        tracing::warn!(index, message, "Sentence failed");
    }

    fn emit_sentence(&self, index: usize, status: SentenceStatus) {
        let _ = self
            .event_tx
            .send(PlayerEvent::SentenceChanged { index, status });
    }

    fn emit_transport(&self) {
        let (state, current_index) = {
            let store = self.store.lock().unwrap();
            (transport_of(&store), store.current_index)
        };
        let _ = self.event_tx.send(PlayerEvent::TransportChanged {
            state,
            current_index,
        });
    }
}

/// Bridge [`PlayerEvent`]s from the controller's channel to an emitter.
///
/// The spawned task self-terminates when the controller is destroyed:
/// `recv()` returns `None` once the sender is dropped and the loop exits.
pub fn spawn_event_bridge(
    mut event_rx: mpsc::UnboundedReceiver<PlayerEvent>,
    emitter: Arc<dyn PlayerEventEmitter>,
) {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            emitter.emit(event);
        }
        // event_rx returned None: controller dropped — task exits.
    });
}

/// Derive the coarse transport state from store flags.
const fn transport_of(store: &PlaybackStore) -> TransportState {
    if !store.is_playing {
        TransportState::Stopped
    } else if store.is_paused {
        TransportState::Paused
    } else {
        TransportState::Playing
    }
}

/// Build notification metadata from sentence text.
fn media_metadata(text: &str) -> MediaMetadata {
    let title: String = text.chars().take(MEDIA_TITLE_MAX_CHARS).collect();
    MediaMetadata {
        title,
        artist: "readaloud".to_string(),
    }
}
