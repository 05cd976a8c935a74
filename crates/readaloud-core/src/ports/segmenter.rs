//! Sentence segmentation port.

/// Error splitting text into sentences.
///
/// Fatal to the `load` call that triggered it; the queue is left empty.
#[derive(Debug, thiserror::Error)]
#[error("Sentence segmentation failed: {0}")]
pub struct SegmentationError(pub String);

/// Splits source text into ordered sentence strings.
///
/// Called once per `load`. Implementations should trim whitespace and
/// drop empty fragments; the returned order is the playback order.
pub trait SentenceSegmenter: Send + Sync {
    /// Segment `text` into sentences for the given language code.
    fn segment(&self, text: &str, language: &str) -> Result<Vec<String>, SegmentationError>;
}
