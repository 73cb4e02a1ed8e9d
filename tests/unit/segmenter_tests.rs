/*!
 * Tests for sentence segmentation strategies
 */

use subcue::app_config::SegmentationStrategy;
use subcue::segmenter::{self, RegexSegmenter, SentenceSegment, UnicodeSegmenter};

use crate::common::SAMPLE_TRANSCRIPT;

/// Test UAX #29 segmentation on the sample transcript
#[test]
fn test_unicode_segment_withTwoSentences_shouldSplitAtBoundaries() {
    let sentences = UnicodeSegmenter.segment(SAMPLE_TRANSCRIPT);

    assert_eq!(
        sentences,
        vec![
            "Hello world!".to_string(),
            "This is a test of the professional SRT generator.".to_string(),
        ]
    );
}

/// Test regex segmentation on the sample transcript
#[test]
fn test_regex_segment_withTwoSentences_shouldSplitAfterTerminalMark() {
    let sentences = RegexSegmenter.segment(SAMPLE_TRANSCRIPT);

    assert_eq!(
        sentences,
        vec![
            "Hello world!".to_string(),
            "This is a test of the professional SRT generator.".to_string(),
        ]
    );
}

/// Test that both strategies agree on simple punctuation
#[test]
fn test_segment_withMixedTerminals_shouldKeepTerminalMarks() {
    let text = "One. Two! Three?";

    for strategy in [SegmentationStrategy::Unicode, SegmentationStrategy::Regex] {
        let sentences = segmenter::for_strategy(strategy).segment(text);
        assert_eq!(
            sentences,
            vec!["One.".to_string(), "Two!".to_string(), "Three?".to_string()],
            "strategy {} disagreed",
            strategy
        );
    }
}

/// Test that text without terminal punctuation yields one sentence
#[test]
fn test_regex_segment_withNoTerminalMark_shouldYieldWholeText() {
    let sentences = RegexSegmenter.segment("just a fragment with no ending");

    assert_eq!(sentences, vec!["just a fragment with no ending".to_string()]);
}

/// Test that a trailing fragment after the last boundary is kept
#[test]
fn test_regex_segment_withTrailingFragment_shouldKeepTail() {
    let sentences = RegexSegmenter.segment("Complete sentence. trailing words");

    assert_eq!(
        sentences,
        vec!["Complete sentence.".to_string(), "trailing words".to_string()]
    );
}

/// Test empty and whitespace-only input
#[test]
fn test_segment_withWhitespaceOnly_shouldYieldNothing() {
    assert!(UnicodeSegmenter.segment("").is_empty());
    assert!(UnicodeSegmenter.segment("   \n\t  ").is_empty());
    assert!(RegexSegmenter.segment("").is_empty());
    assert!(RegexSegmenter.segment("   \n\t  ").is_empty());
}

/// Test that multiple spaces between sentences are not carried over
#[test]
fn test_regex_segment_withMultipleSpaces_shouldTrimSentences() {
    let sentences = RegexSegmenter.segment("First.   Second.");

    assert_eq!(sentences, vec!["First.".to_string(), "Second.".to_string()]);
}
