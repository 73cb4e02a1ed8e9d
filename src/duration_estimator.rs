use crate::app_config::TimingConfig;
use crate::block_formatter::SubtitleBlock;

// @module: Reading-speed duration estimation

/// Converts a word count and a reading speed into a clamped display duration.
///
/// The configured range is 150-180 words per minute, but any positive rate is
/// accepted; a non-positive rate falls back to the minimum duration rather
/// than dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct DurationEstimator {
    words_per_minute: f64,
    min_secs: f64,
    max_secs: f64,
}

impl DurationEstimator {
    /// Create an estimator with the default professional bounds (1.5-6.0s)
    pub fn new(words_per_minute: f64) -> Self {
        let timing = TimingConfig::default();
        Self::with_bounds(words_per_minute, timing.min_block_secs, timing.max_block_secs)
    }

    /// Create an estimator with explicit duration bounds
    pub fn with_bounds(words_per_minute: f64, min_secs: f64, max_secs: f64) -> Self {
        DurationEstimator {
            words_per_minute,
            min_secs,
            max_secs,
        }
    }

    /// Estimated display duration in seconds for `word_count` words,
    /// clamped into `[min_secs, max_secs]`
    pub fn estimate(&self, word_count: usize) -> f64 {
        let words_per_second = self.words_per_minute / 60.0;
        if words_per_second <= 0.0 {
            return self.min_secs;
        }
        (word_count as f64 / words_per_second).clamp(self.min_secs, self.max_secs)
    }

    /// Estimated display duration for a subtitle block
    pub fn estimate_block(&self, block: &SubtitleBlock) -> f64 {
        self.estimate(block.word_count())
    }
}
