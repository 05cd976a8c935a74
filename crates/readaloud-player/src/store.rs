//! Playback store — the single source of truth for queue and transport state.
//!
//! Ordered sentence records plus transport flags, owned exclusively by the
//! controller behind one mutex. The generation coordinator writes sentence
//! fields only while holding the in-flight marker for that index; nothing
//! else mutates this state.

use readaloud_core::{PlaybackSnapshot, Sentence, SentenceSnapshot, SentenceStatus};

/// Queue and transport state.
#[derive(Debug)]
pub struct PlaybackStore {
    /// Sentences in playback order; replaced wholesale on load.
    sentences: Vec<Sentence>,

    /// Current sentence; `None` means fully stopped.
    pub current_index: Option<usize>,

    /// Whether the transport is running (playing or paused).
    pub is_playing: bool,

    /// Whether playback is suspended mid-sentence. Only meaningful while
    /// `is_playing` is true.
    pub is_paused: bool,

    /// Whether a load is in progress.
    pub is_loading: bool,

    /// Width of the pre-generation window.
    pub lookahead: usize,
}

impl PlaybackStore {
    /// Create an empty store with the given lookahead width.
    #[must_use]
    pub const fn new(lookahead: usize) -> Self {
        Self {
            sentences: Vec::new(),
            current_index: None,
            is_playing: false,
            is_paused: false,
            is_loading: false,
            lookahead,
        }
    }

    /// Replace the sentence sequence wholesale (load).
    ///
    /// Every new sentence starts `Pending`; transport state is reset.
    pub fn replace_sentences(&mut self, texts: Vec<String>) {
        self.sentences = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Sentence::new(i, text))
            .collect();
        self.current_index = None;
        self.is_playing = false;
        self.is_paused = false;
    }

    /// Number of sentences in the queue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Whether `index` is a valid queue position.
    #[must_use]
    pub const fn in_range(&self, index: usize) -> bool {
        index < self.sentences.len()
    }

    /// Borrow a sentence record.
    #[must_use]
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Mutably borrow a sentence record.
    pub fn sentence_mut(&mut self, index: usize) -> Option<&mut Sentence> {
        self.sentences.get_mut(index)
    }

    /// Status of the sentence at `index`, if in range.
    #[must_use]
    pub fn status(&self, index: usize) -> Option<SentenceStatus> {
        self.sentences.get(index).map(|s| s.status)
    }

    /// Apply the stop/skip reset rule to one sentence.
    pub fn reset_sentence(&mut self, index: usize) {
        if let Some(sentence) = self.sentences.get_mut(index) {
            sentence.reset_after_playback();
        }
    }

    /// Apply the stop/skip reset rule to every sentence (full stop).
    pub fn reset_all_sentences(&mut self) {
        for sentence in &mut self.sentences {
            sentence.reset_after_playback();
        }
    }

    /// Count sentences currently holding the given status.
    #[must_use]
    pub fn count_with_status(&self, status: SentenceStatus) -> usize {
        self.sentences.iter().filter(|s| s.status == status).count()
    }

    /// Build a UI-safe snapshot of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            sentences: self.sentences.iter().map(SentenceSnapshot::from).collect(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_paused: self.is_paused,
            is_loading: self.is_loading,
            lookahead: self.lookahead,
        }
    }
}
