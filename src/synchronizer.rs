use log::{debug, warn};

use crate::block_formatter::SubtitleBlock;
use crate::duration_estimator::DurationEstimator;
use crate::srt_render::TimedEntry;

// @module: Timeline synchronization against a target duration

/// Walks subtitle blocks in order and assigns cumulative start/end times
/// against a target total duration.
///
/// When the naive sum of per-block reading durations fits inside the target,
/// each block keeps its estimate and the last entry absorbs the remaining
/// slack so the timeline covers exactly `[0, target]`. When it does not fit,
/// every duration is scaled by a global compression ratio and re-floored at
/// a looser minimum; blocks that no longer fit into the budget are dropped.
pub struct TimelineSynchronizer {
    estimator: DurationEstimator,
    compressed_min_secs: f64,
}

impl TimelineSynchronizer {
    /// Create a synchronizer with a per-block estimator and the floor
    /// applied to compressed durations
    pub fn new(estimator: DurationEstimator, compressed_min_secs: f64) -> Self {
        TimelineSynchronizer {
            estimator,
            compressed_min_secs,
        }
    }

    /// Assign start/end times to `blocks` against `target_secs`.
    ///
    /// Blocks are processed strictly in input order with no look-ahead
    /// beyond the running total. An empty input yields an empty output.
    pub fn synchronize(&self, blocks: &[SubtitleBlock], target_secs: f64) -> Vec<TimedEntry> {
        if blocks.is_empty() {
            return Vec::new();
        }

        let naive_total: f64 = blocks
            .iter()
            .map(|block| self.estimator.estimate_block(block))
            .sum();

        if naive_total <= target_secs {
            debug!(
                "Estimated {:.2}s of reading time fits in {:.2}s of audio",
                naive_total, target_secs
            );
            self.assign_direct(blocks, target_secs)
        } else {
            let ratio = target_secs / naive_total;
            debug!(
                "Estimated {:.2}s exceeds {:.2}s of audio, compressing by {:.3}",
                naive_total, target_secs, ratio
            );
            self.assign_compressed(blocks, target_secs, ratio)
        }
    }

    /// Sum-fits regime: clamped estimates in sequence, last entry's end
    /// forced to the target to absorb the residual slack
    fn assign_direct(&self, blocks: &[SubtitleBlock], target_secs: f64) -> Vec<TimedEntry> {
        let last = blocks.len() - 1;
        let mut entries = Vec::with_capacity(blocks.len());
        let mut current_time = 0.0;

        for (i, block) in blocks.iter().enumerate() {
            let end = if i == last {
                target_secs
            } else {
                current_time + self.estimator.estimate_block(block)
            };
            entries.push(TimedEntry::new(i + 1, current_time, end, block.clone()));
            current_time = end;
        }

        entries
    }

    /// Compression regime: scale every estimate by `ratio`, re-floor at the
    /// compressed minimum, and never let the running time pass the target.
    /// Blocks remaining after the budget is exhausted are dropped.
    fn assign_compressed(
        &self,
        blocks: &[SubtitleBlock],
        target_secs: f64,
        ratio: f64,
    ) -> Vec<TimedEntry> {
        let mut entries = Vec::new();
        let mut current_time = 0.0;

        for (i, block) in blocks.iter().enumerate() {
            if current_time >= target_secs {
                warn!(
                    "Time budget exhausted at {:.2}s, dropping {} remaining subtitle block(s)",
                    target_secs,
                    blocks.len() - i
                );
                break;
            }

            let scaled = self.estimator.estimate_block(block) * ratio;
            let duration = scaled
                .max(self.compressed_min_secs)
                .min(target_secs - current_time);

            entries.push(TimedEntry::new(
                entries.len() + 1,
                current_time,
                current_time + duration,
                block.clone(),
            ));
            current_time += duration;
        }

        entries
    }

    /// Equal-division timing used by the smart/dummy modes: every block gets
    /// `audio_secs / count`, floored at `min_block_secs` per block. When the
    /// floor wins, the overall duration grows past the audio length; the
    /// last block's end is always set to the overall total.
    pub fn distribute_evenly(
        blocks: &[SubtitleBlock],
        audio_secs: f64,
        min_block_secs: f64,
    ) -> Vec<TimedEntry> {
        if blocks.is_empty() {
            return Vec::new();
        }

        let count = blocks.len();
        let minimum_total = min_block_secs * count as f64;
        let (per_block, total) = if audio_secs < minimum_total {
            (min_block_secs, minimum_total)
        } else {
            (audio_secs / count as f64, audio_secs)
        };

        blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let start = i as f64 * per_block;
                let end = if i == count - 1 {
                    total
                } else {
                    (i + 1) as f64 * per_block
                };
                TimedEntry::new(i + 1, start, end, block.clone())
            })
            .collect()
    }
}
