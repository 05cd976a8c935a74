//! Event emitter trait for cross-crate event broadcasting.
//!
//! This module defines the abstraction for emitting player events.
//! Implementations handle transport details (channels, Tauri events, SSE, etc.).

use crate::events::PlayerEvent;

/// Trait for emitting player events.
///
/// This abstraction keeps event plumbing consistent across adapters and
/// prevents channel types from becoming part of the public API surface.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't need events
/// - Adapter-specific implementations (Tauri, SSE, etc.)
pub trait PlayerEventEmitter: Send + Sync {
    /// Emit a player event.
    ///
    /// Implementations should handle the event asynchronously or buffer it.
    /// This method should not block.
    fn emit(&self, event: PlayerEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn PlayerEventEmitter>` without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn PlayerEventEmitter>;
}

/// A no-op event emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlayerEventEmitter for NoopEmitter {
    fn emit(&self, _event: PlayerEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn PlayerEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn noop_emitter_discards_events() {
        let emitter = NoopEmitter::new();
        emitter.emit(PlayerEvent::PlaybackFinished);
    }

    #[test]
    fn noop_emitter_clone_box() {
        let emitter = NoopEmitter::new();
        let _boxed: Box<dyn PlayerEventEmitter> = emitter.clone_box();
    }

    #[test]
    fn arc_emitter() {
        let emitter: Arc<dyn PlayerEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(PlayerEvent::PlaybackStarted);
    }
}
