use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::app_config::SegmentationStrategy;

// @module: Sentence segmentation strategies

// @const: Sentence-terminal punctuation followed by at least one space
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?] +").unwrap()
});

/// Splits raw text into sentence-like units.
///
/// Implementations must return trimmed, non-empty sentences in source order.
/// Empty or whitespace-only input yields an empty vector; callers treat that
/// as a reportable "no content" condition.
pub trait SentenceSegment {
    /// Split `text` into sentences
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Sentence boundaries per UAX #29 (the preferred, language-aware strategy)
pub struct UnicodeSegmenter;

impl SentenceSegment for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Heuristic fallback: cut after `.`, `!` or `?` when followed by spaces.
///
/// The regex crate has no lookbehind, so matches are located with
/// `find_iter` and each cut is placed just after the terminal mark.
/// Abbreviations and ellipses are intentionally not special-cased.
pub struct RegexSegmenter;

impl SentenceSegment for RegexSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        let mut cursor = 0;
        for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(trimmed) {
            // the terminal mark is a single ASCII byte
            let cut = boundary.start() + 1;
            let sentence = trimmed[cursor..cut].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            cursor = boundary.end();
        }

        let tail = trimmed[cursor..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}

/// Resolve the configured strategy to a segmenter instance
pub fn for_strategy(strategy: SegmentationStrategy) -> Box<dyn SentenceSegment + Send + Sync> {
    match strategy {
        SegmentationStrategy::Unicode => Box::new(UnicodeSegmenter),
        SegmentationStrategy::Regex => Box::new(RegexSegmenter),
    }
}
