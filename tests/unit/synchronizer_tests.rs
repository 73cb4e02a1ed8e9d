/*!
 * Tests for timeline synchronization
 */

use subcue::block_formatter::{BlockFormatter, SubtitleBlock};
use subcue::duration_estimator::DurationEstimator;
use subcue::segmenter::{SentenceSegment, UnicodeSegmenter};
use subcue::synchronizer::TimelineSynchronizer;

use crate::common::{block_of_words, SAMPLE_TRANSCRIPT};

const EPSILON: f64 = 1e-9;

fn default_synchronizer() -> TimelineSynchronizer {
    TimelineSynchronizer::new(DurationEstimator::new(165.0), 1.0)
}

/// Test the empty-input contract
#[test]
fn test_synchronize_withNoBlocks_shouldYieldNoEntries() {
    let entries = default_synchronizer().synchronize(&[], 60.0);

    assert!(entries.is_empty());
}

/// Test the sum-fits regime: contiguous entries, last end forced to target
#[test]
fn test_synchronize_withFittingEstimates_shouldStretchLastEntryToTarget() {
    let blocks = vec![block_of_words(8), block_of_words(8), block_of_words(8)];

    // 3 * 2.909s = 8.73s of reading time against 30s of audio
    let entries = default_synchronizer().synchronize(&blocks, 30.0);

    assert_eq!(entries.len(), 3);
    let per_block = 8.0 * 60.0 / 165.0;
    assert!((entries[0].start_secs - 0.0).abs() < EPSILON);
    assert!((entries[0].duration_secs() - per_block).abs() < EPSILON);
    assert!((entries[1].duration_secs() - per_block).abs() < EPSILON);
    assert!((entries[2].end_secs - 30.0).abs() < EPSILON);
    for pair in entries.windows(2) {
        assert!((pair[1].start_secs - pair[0].end_secs).abs() < EPSILON);
    }
}

/// Test that entry indices are sequential from 1
#[test]
fn test_synchronize_withFittingEstimates_shouldNumberEntriesFromOne() {
    let blocks = vec![block_of_words(4), block_of_words(4)];

    let entries = default_synchronizer().synchronize(&blocks, 60.0);

    assert_eq!(entries[0].index, 1);
    assert_eq!(entries[1].index, 2);
}

/// Test the compression regime: global ratio, re-floored durations, and
/// blocks dropped once the budget runs out
#[test]
fn test_synchronize_withOverlongEstimates_shouldCompressAndDropTail() {
    // 20 four-word blocks clamp to 1.5s each, 30s naive total
    let blocks: Vec<SubtitleBlock> = (0..20).map(|_| block_of_words(4)).collect();

    let entries = default_synchronizer().synchronize(&blocks, 7.5);

    // ratio 0.25 scales each to 0.375s, floored back to 1.0s; seven full
    // seconds fit, the eighth entry gets the 0.5s remainder, twelve drop
    assert_eq!(entries.len(), 8);
    for entry in &entries[..7] {
        assert!((entry.duration_secs() - 1.0).abs() < EPSILON);
    }
    assert!((entries[7].duration_secs() - 0.5).abs() < EPSILON);
    assert!((entries[7].end_secs - 7.5).abs() < EPSILON);
    assert_eq!(entries[7].index, 8);
}

/// Test that compression never pushes an entry past the target
#[test]
fn test_synchronize_withOverlongEstimates_shouldNeverExceedTarget() {
    let blocks: Vec<SubtitleBlock> = (0..50).map(|_| block_of_words(8)).collect();

    let entries = default_synchronizer().synchronize(&blocks, 13.3);

    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(entry.end_secs <= 13.3 + EPSILON);
        assert!(entry.duration_secs() > 0.0);
    }
    for pair in entries.windows(2) {
        assert!((pair[1].start_secs - pair[0].end_secs).abs() < EPSILON);
    }
}

/// Test an exact-fit total keeps the direct regime
#[test]
fn test_synchronize_withExactFit_shouldUseDirectAssignment() {
    // two four-word blocks clamp to 1.5s each, exactly the target
    let blocks = vec![block_of_words(4), block_of_words(4)];

    let entries = default_synchronizer().synchronize(&blocks, 3.0);

    assert_eq!(entries.len(), 2);
    assert!((entries[0].end_secs - 1.5).abs() < EPSILON);
    assert!((entries[1].end_secs - 3.0).abs() < EPSILON);
}

/// Test the full professional composition over the sample transcript
#[test]
fn test_synchronize_withSegmentedTranscript_shouldCoverWholeTarget() {
    let sentences = UnicodeSegmenter.segment(SAMPLE_TRANSCRIPT);
    let blocks: Vec<SubtitleBlock> = sentences
        .iter()
        .flat_map(|s| BlockFormatter::blocks_from_sentence(s))
        .collect();

    let entries = default_synchronizer().synchronize(&blocks, 30.0);

    // "Hello world!" clamps to 1.5s; the nine-word sentence yields one
    // eight-word block whose end is stretched to the target
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].block.line1, "Hello world!");
    assert!((entries[0].duration_secs() - 1.5).abs() < EPSILON);
    assert!((entries[1].end_secs - 30.0).abs() < EPSILON);
}

/// Test equal division over a comfortable duration
#[test]
fn test_distribute_evenly_withAmpleAudio_shouldSplitEqually() {
    let blocks: Vec<SubtitleBlock> = (0..5).map(|_| block_of_words(8)).collect();

    let entries = TimelineSynchronizer::distribute_evenly(&blocks, 50.0, 2.0);

    assert_eq!(entries.len(), 5);
    for (i, entry) in entries.iter().enumerate() {
        assert!((entry.start_secs - i as f64 * 10.0).abs() < EPSILON);
        assert!((entry.duration_secs() - 10.0).abs() < EPSILON);
    }
    assert!((entries[4].end_secs - 50.0).abs() < EPSILON);
}

/// Test that the per-block floor wins over a short audio duration
#[test]
fn test_distribute_evenly_withShortAudio_shouldApplyPerBlockFloor() {
    let blocks: Vec<SubtitleBlock> = (0..5).map(|_| block_of_words(8)).collect();

    // 4s of audio over 5 blocks would give 0.8s each; the 2s floor wins
    // and the timeline grows past the audio
    let entries = TimelineSynchronizer::distribute_evenly(&blocks, 4.0, 2.0);

    assert_eq!(entries.len(), 5);
    for entry in &entries {
        assert!((entry.duration_secs() - 2.0).abs() < EPSILON);
    }
    assert!((entries[4].end_secs - 10.0).abs() < EPSILON);
}

/// Test equal division of the empty input
#[test]
fn test_distribute_evenly_withNoBlocks_shouldYieldNoEntries() {
    assert!(TimelineSynchronizer::distribute_evenly(&[], 60.0, 2.0).is_empty());
}
