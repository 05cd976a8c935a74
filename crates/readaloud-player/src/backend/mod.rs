//! Playback backend plumbing — backend selection, the debounced advance
//! gate, and the media-session poll watcher.
//!
//! Two structurally different backends feed one advance path: the local
//! backend pushes a finish callback, the media-session backend is polled
//! and the finish is inferred. Both funnel into [`FinishSignal`]s consumed
//! by the controller, guarded by the [`AdvanceGate`] so overlapping
//! reports of the same finish produce exactly one advance.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use readaloud_core::MediaSessionPort;

use crate::epoch::{EpochStamp, PlaybackEpoch};
use crate::store::PlaybackStore;

/// Which backend is driving the current sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Local decode-and-play; completion arrives as a direct callback.
    Push,

    /// OS media session; completion is inferred by polling.
    Poll,
}

/// A "this sentence finished" report from either backend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FinishSignal {
    /// Sentence the report is about.
    pub index: usize,

    /// Epoch under which the playback was dispatched.
    pub stamp: EpochStamp,
}

// ── Advance gate ───────────────────────────────────────────────────

/// Guards the auto-advance path against double-firing.
///
/// Two protections, per the unified-advance design: a re-entrancy flag
/// suppressing concurrent attempts, and a minimum gap since the last
/// committed advance so two overlapping observations of the same finish
/// (e.g. back-to-back poll ticks) cannot advance twice.
#[derive(Debug)]
pub struct AdvanceGate {
    busy: AtomicBool,
    last_advance: Mutex<Option<Instant>>,
    min_gap: Duration,
}

impl AdvanceGate {
    /// Create a gate with the given minimum gap between advances.
    #[must_use]
    pub const fn new(min_gap: Duration) -> Self {
        Self {
            busy: AtomicBool::new(false),
            last_advance: Mutex::new(None),
            min_gap,
        }
    }

    /// Try to begin an advance.
    ///
    /// Returns `None` when another advance is in progress or the previous
    /// committed advance was less than the minimum gap ago. On success the
    /// returned guard holds the re-entrancy flag; call
    /// [`AdvanceTicket::commit`] once the advance actually happened, or
    /// drop the guard to release without counting.
    pub fn try_begin(&self) -> Option<AdvanceTicket<'_>> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return None;
        }

        let too_soon = self
            .last_advance
            .lock()
            .unwrap()
            .is_some_and(|last| last.elapsed() < self.min_gap);
        if too_soon {
            self.busy.store(false, Ordering::SeqCst);
            return None;
        }

        Some(AdvanceTicket { gate: self })
    }

    /// Forget the last advance time (called on stop/load so the next
    /// playback run starts with a clean slate).
    pub fn reset(&self) {
        *self.last_advance.lock().unwrap() = None;
    }
}

/// Exclusive permission to perform one advance.
#[derive(Debug)]
pub struct AdvanceTicket<'a> {
    gate: &'a AdvanceGate,
}

impl AdvanceTicket<'_> {
    /// Record that the advance happened, starting the debounce window.
    pub fn commit(self) {
        *self.gate.last_advance.lock().unwrap() = Some(Instant::now());
        // Drop clears the busy flag.
    }
}

impl Drop for AdvanceTicket<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::SeqCst);
    }
}

// ── Media-session poll watcher ─────────────────────────────────────

/// Spawn the poll loop inferring sentence completion from the media
/// session.
///
/// The watcher queries the session at a fixed interval and reports a
/// finish once it has seen playback running and then observes it stopped,
/// while the transport still believes this sentence should be playing.
/// Reports are level-triggered — consecutive ticks may both report the
/// same finish, which is exactly what the [`AdvanceGate`] debounces.
///
/// The loop tears itself down when the epoch moves on, the transport
/// stops, or the playhead leaves this sentence. Polling is suspended
/// (not torn down) while paused.
pub(crate) fn spawn_poll_watcher(
    session: std::sync::Arc<dyn MediaSessionPort>,
    store: std::sync::Arc<Mutex<PlaybackStore>>,
    epoch: PlaybackEpoch,
    stamp: EpochStamp,
    index: usize,
    poll_interval: Duration,
    finish_tx: mpsc::UnboundedSender<FinishSignal>,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut saw_playing = false;

        loop {
            ticker.tick().await;

            if !epoch.is_current(stamp) {
                return;
            }

            let (transport_playing, paused, current) = {
                let store = store.lock().unwrap();
                (store.is_playing, store.is_paused, store.current_index)
            };
            if !transport_playing || current != Some(index) {
                return;
            }
            if paused {
                // Suspended; forget the running observation so a resume
                // race cannot be mistaken for a finish.
                saw_playing = false;
                continue;
            }

            let state = match session.query_state().await {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Media session state query failed");
                    continue;
                }
            };

            if state.is_playing {
                saw_playing = true;
            } else if saw_playing {
                tracing::debug!(index, "Media session went idle — reporting finish");
                if finish_tx.send(FinishSignal { index, stamp }).is_err() {
                    return;
                }
                // Keep ticking: the advance moves the playhead and the
                // current-index check above ends the loop.
            }
        }
    });
}
