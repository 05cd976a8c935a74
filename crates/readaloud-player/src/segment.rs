//! Default sentence segmentation.
//!
//! Splits text at `.` `!` `?` boundaries with protection for common
//! abbreviations, trims whitespace, and drops empty fragments. This is the
//! segmenter wired in by default; hosts with language-specific tokenizers
//! can supply their own [`SentenceSegmenter`] implementation instead.

use readaloud_core::{SegmentationError, SentenceSegmenter};

/// Abbreviations that end with a period but do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "vs.", "etc.", "e.g.", "i.e.",
    "Inc.", "Ltd.", "Co.", "No.", "Vol.", "Fig.", "approx.",
];

/// Abbreviation-aware sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSegmenter;

impl DefaultSegmenter {
    /// Create a new segmenter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for DefaultSegmenter {
    fn segment(&self, text: &str, _language: &str) -> Result<Vec<String>, SegmentationError> {
        if text.trim().is_empty() {
            return Err(SegmentationError("input text is empty".to_string()));
        }

        let sentences: Vec<String> = split_sentences(text)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(SegmentationError(
                "no sentences found in input text".to_string(),
            ));
        }

        Ok(sentences)
    }
}

/// Split text into sentences at `.` `!` `?` boundaries.
///
/// A boundary is terminal punctuation followed by whitespace, unless the
/// text before the punctuation ends with a known abbreviation.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        if (c == '.' || c == '!' || c == '?') && i + 1 < len {
            let next = chars[i + 1];
            if next.is_whitespace() && !ends_with_abbreviation(&current) {
                sentences.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Whether the accumulated text ends with a protected abbreviation.
fn ends_with_abbreviation(text: &str) -> bool {
    let trimmed = text.trim_end();
    ABBREVIATIONS.iter().any(|abbrev| {
        trimmed.ends_with(abbrev) && {
            // The character before the abbreviation must not be alphanumeric,
            // so "Blvd." never matches "vd." style suffixes.
            let prefix_len = trimmed.len() - abbrev.len();
            trimmed[..prefix_len]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric())
        }
    })
}
