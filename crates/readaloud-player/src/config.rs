//! Player configuration.

use std::time::Duration;

/// Configuration for the playback controller.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Language code passed to segmentation and synthesis (e.g. `"en"`).
    pub language: String,

    /// Voice style identifier (e.g. `"F1"`).
    pub voice_style: String,

    /// Synthesis quality steps — higher is slower but cleaner.
    pub quality_steps: usize,

    /// Speech rate multiplier (1.0 = normal).
    pub speed: f32,

    /// Number of sentences ahead of the playhead to pre-generate.
    pub lookahead: usize,

    /// Interval between media-session state polls.
    pub poll_interval: Duration,

    /// Minimum gap between two auto-advances, regardless of which backend
    /// reported the finish.
    pub advance_debounce: Duration,

    /// Re-check interval while waiting on a sentence that is `Generating`.
    pub generating_poll: Duration,

    /// Upper bound on how long the play loop waits for a `Generating`
    /// sentence before marking it failed.
    pub generating_wait_cap: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            voice_style: "F1".to_string(),
            quality_steps: 16,
            speed: 1.0,
            lookahead: 3,
            poll_interval: Duration::from_millis(200),
            advance_debounce: Duration::from_millis(300),
            generating_poll: Duration::from_millis(100),
            generating_wait_cap: Duration::from_secs(30),
        }
    }
}

impl PlayerConfig {
    /// Clamp tunables into sane ranges.
    ///
    /// `speed` outside 0.5–2.0 produces garbled output from the synthesis
    /// models; a zero `lookahead` is allowed (generation happens only on
    /// demand).
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.speed = self.speed.clamp(0.5, 2.0);
        self.quality_steps = self.quality_steps.max(1);
        self
    }
}
