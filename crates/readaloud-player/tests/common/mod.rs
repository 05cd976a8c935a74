//! Shared test doubles for the controller integration tests.
//!
//! Hand-rolled port implementations with scripted behaviour: a synthesizer
//! with configurable latency and per-index failures, a local backend whose
//! completion callback is fired manually by the test, and a media session
//! whose reported state the test flips.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use readaloud_core::{
    AudioStore, AudioStoreError, DecodedAudio, LocalAudioError, LocalAudioPort, MediaMetadata,
    MediaSessionAction, MediaSessionError, MediaSessionPort, MediaSessionState,
    PlaybackDoneCallback, SentenceStatus, SpeechSynthesizer, SynthesisAudio, SynthesisError,
    SynthesisRequest,
};
use readaloud_player::{PlaybackController, PlayerConfig};

// ── Synthesizer ────────────────────────────────────────────────────

/// Synthesizer double with configurable latency and scripted failures.
pub struct ScriptedSynth {
    /// Indices whose synthesis fails.
    pub fail_indices: HashSet<usize>,

    /// Artificial synthesis latency.
    pub latency: Duration,

    /// Every index that was submitted for synthesis, in call order.
    pub calls: Mutex<Vec<usize>>,
}

impl ScriptedSynth {
    pub fn new(latency: Duration) -> Self {
        Self {
            fail_indices: HashSet::new(),
            latency,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(latency: Duration, fail_indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_indices: fail_indices.into_iter().collect(),
            latency,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, index: usize) -> usize {
        self.calls.lock().unwrap().iter().filter(|&&i| i == index).count()
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedSynth {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisAudio, SynthesisError> {
        self.calls.lock().unwrap().push(request.sentence_index);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail_indices.contains(&request.sentence_index) {
            return Err(SynthesisError::Failed(format!(
                "scripted failure for sentence {}",
                request.sentence_index
            )));
        }
        Ok(SynthesisAudio {
            wav_bytes: format!("wav-{}", request.sentence_index).into_bytes(),
            duration: Duration::from_millis(400),
        })
    }
}

// ── Audio store ────────────────────────────────────────────────────

/// In-memory persistence returning `mem://` URLs.
#[derive(Default)]
pub struct MemoryAudioStore {
    pub stored: Mutex<Vec<usize>>,
    pub fail: AtomicBool,
}

impl AudioStore for MemoryAudioStore {
    fn store(&self, sentence_index: usize, _wav_bytes: &[u8]) -> Result<String, AudioStoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AudioStoreError::WriteFailed("scripted".to_string()));
        }
        self.stored.lock().unwrap().push(sentence_index);
        Ok(format!("mem://sentence/{sentence_index}"))
    }

    fn clear(&self) -> Result<(), AudioStoreError> {
        self.stored.lock().unwrap().clear();
        Ok(())
    }
}

// ── Local audio backend ────────────────────────────────────────────

/// Local backend whose completion callback is fired manually.
#[derive(Default)]
pub struct ManualLocalAudio {
    pending: Mutex<Option<PlaybackDoneCallback>>,
    pub play_count: AtomicUsize,
    pub pause_count: AtomicUsize,
    pub resume_count: AtomicUsize,
    pub stop_count: AtomicUsize,
    pub fail_play: AtomicBool,
}

impl ManualLocalAudio {
    /// Invoke the pending completion callback, as a real drain would.
    pub fn finish_current(&self) {
        if let Some(callback) = self.pending.lock().unwrap().take() {
            callback();
        }
    }

    /// Steal the pending callback without firing it, so the test can
    /// replay it later as a stale completion.
    pub fn take_pending(&self) -> Option<PlaybackDoneCallback> {
        self.pending.lock().unwrap().take()
    }
}

impl LocalAudioPort for ManualLocalAudio {
    fn decode(&self, _wav_bytes: &[u8]) -> Result<DecodedAudio, LocalAudioError> {
        Ok(DecodedAudio {
            samples: vec![0.0; 64],
            sample_rate: 24_000,
            duration: Duration::from_millis(400),
        })
    }

    fn play(
        &self,
        _audio: DecodedAudio,
        on_finished: PlaybackDoneCallback,
    ) -> Result<(), LocalAudioError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(LocalAudioError::OutputStreamError("scripted".to_string()));
        }
        self.play_count.fetch_add(1, Ordering::SeqCst);
        *self.pending.lock().unwrap() = Some(on_finished);
        Ok(())
    }

    fn pause(&self) {
        self.pause_count.fetch_add(1, Ordering::SeqCst);
    }

    fn resume(&self) {
        self.resume_count.fetch_add(1, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stop_count.fetch_add(1, Ordering::SeqCst);
        // A real backend discards the pending completion on stop.
        self.pending.lock().unwrap().take();
    }
}

// ── Media session ──────────────────────────────────────────────────

/// Media session double; the test flips the reported playback state.
pub struct FakeMediaSession {
    pub is_playing: AtomicBool,
    pub played_urls: Mutex<Vec<String>>,
    pub fail_play: AtomicBool,
    pub stop_count: AtomicUsize,
    actions: Mutex<Option<mpsc::UnboundedReceiver<MediaSessionAction>>>,
}

impl FakeMediaSession {
    /// Create the session plus the sender the test uses to inject
    /// hardware actions.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedSender<MediaSessionAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Arc::new(Self {
            is_playing: AtomicBool::new(false),
            played_urls: Mutex::new(Vec::new()),
            fail_play: AtomicBool::new(false),
            stop_count: AtomicUsize::new(0),
            actions: Mutex::new(Some(rx)),
        });
        (session, tx)
    }

    pub fn set_playing(&self, playing: bool) {
        self.is_playing.store(playing, Ordering::SeqCst);
    }
}

#[async_trait]
impl MediaSessionPort for FakeMediaSession {
    async fn play(&self, url: &str, _metadata: &MediaMetadata) -> Result<(), MediaSessionError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(MediaSessionError::OperationFailed("scripted".to_string()));
        }
        self.played_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn pause(&self) -> Result<(), MediaSessionError> {
        self.is_playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn resume(&self) -> Result<(), MediaSessionError> {
        self.is_playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<(), MediaSessionError> {
        self.stop_count.fetch_add(1, Ordering::SeqCst);
        self.is_playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn query_state(&self) -> Result<MediaSessionState, MediaSessionError> {
        Ok(MediaSessionState {
            is_playing: self.is_playing.load(Ordering::SeqCst),
        })
    }

    fn subscribe_actions(&self) -> Option<mpsc::UnboundedReceiver<MediaSessionAction>> {
        self.actions.lock().unwrap().take()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Test config with timings shrunk so scenarios run quickly.
pub fn fast_config() -> PlayerConfig {
    PlayerConfig {
        lookahead: 3,
        poll_interval: Duration::from_millis(20),
        advance_debounce: Duration::from_millis(25),
        generating_poll: Duration::from_millis(10),
        generating_wait_cap: Duration::from_secs(5),
        ..PlayerConfig::default()
    }
}

/// Poll the snapshot until the sentence reaches `status` or 2 s elapse.
pub async fn wait_for_status(controller: &PlaybackController, index: usize, status: SentenceStatus) {
    for _ in 0..200 {
        let snap = controller.snapshot();
        if snap.sentences.get(index).is_some_and(|s| s.status == status) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let snap = controller.snapshot();
    panic!(
        "sentence {index} never reached {status:?}; statuses: {:?}",
        snap.sentences.iter().map(|s| s.status).collect::<Vec<_>>()
    );
}

/// Poll until the transport stops or 2 s elapse.
pub async fn wait_for_stopped(controller: &PlaybackController) {
    for _ in 0..200 {
        if !controller.snapshot().is_playing {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("transport never stopped");
}
