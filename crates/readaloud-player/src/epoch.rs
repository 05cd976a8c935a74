//! Playback epoch — the monotonic token that cancels stale async work.
//!
//! Every asynchronous continuation (synthesis completion, backend finish
//! callback, poll tick) captures a stamp at scheduling time and discards
//! all side effects when the stamp no longer matches the live counter.
//! Bumping the counter is the sole cancellation primitive: it does not
//! synchronously stop in-flight work, but guarantees its results are
//! ignored on arrival.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A captured epoch value, valid until the next bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochStamp(u64);

/// Shared monotonic playback epoch.
///
/// Cloning shares the underlying counter; all clones observe bumps
/// immediately.
#[derive(Debug, Clone)]
pub struct PlaybackEpoch {
    counter: Arc<AtomicU64>,
}

impl PlaybackEpoch {
    /// Create a new epoch starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance the epoch, invalidating every outstanding stamp.
    ///
    /// Returns the stamp of the new epoch for the caller to hand to the
    /// work it is about to schedule.
    pub fn bump(&self) -> EpochStamp {
        let next = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(epoch = next, "Playback epoch advanced");
        EpochStamp(next)
    }

    /// Capture the current epoch without advancing it.
    #[must_use]
    pub fn stamp(&self) -> EpochStamp {
        EpochStamp(self.counter.load(Ordering::SeqCst))
    }

    /// Whether the given stamp still matches the live epoch.
    #[must_use]
    pub fn is_current(&self, stamp: EpochStamp) -> bool {
        self.counter.load(Ordering::SeqCst) == stamp.0
    }
}

impl Default for PlaybackEpoch {
    fn default() -> Self {
        Self::new()
    }
}
