use std::path::Path;
use anyhow::Result;
use log::{error, info, warn};

use crate::app_config::{AlignmentMode, Capabilities, Config};
use crate::block_formatter::{BlockFormatter, SubtitleBlock, WORDS_PER_LINE};
use crate::duration_estimator::DurationEstimator;
use crate::errors::InputError;
use crate::media_probe::{MediaProbe, DEFAULT_DURATION_SECS};
use crate::segmenter::{self, SentenceSegment};
use crate::srt_render::{self, TimedEntry};
use crate::synchronizer::TimelineSynchronizer;
use crate::text_extractor::TextExtractor;

// @module: Alignment orchestration - one pipeline, three presets

/// Inputs for a single alignment run
#[derive(Debug, Default)]
pub struct AlignmentRequest<'a> {
    /// Audio or video file to time against
    pub audio_file: Option<&'a Path>,

    /// Transcript file (txt, pdf, docx)
    pub text_file: Option<&'a Path>,

    /// Inline transcript; wins over the file when both are given
    pub inline_text: Option<&'a str>,
}

/// Result of an alignment run: a human-readable report, plus the rendered
/// SRT artifact when the run succeeded
#[derive(Debug)]
pub struct AlignmentOutcome {
    /// Summary for the user, or the failure message
    pub report: String,

    /// Rendered SRT content; absent on failure
    pub artifact: Option<String>,
}

/// Composes segmentation, block formatting, timing synchronization and SRT
/// serialization against a real or assumed audio duration.
///
/// One pipeline with three presets (professional/smart/dummy) selected by
/// [`AlignmentMode`]; the presets differ only in their segmentation source,
/// duration source and timing policy. No state survives between runs.
pub struct Aligner {
    config: Config,
    capabilities: Capabilities,
    segmenter: Box<dyn SentenceSegment + Send + Sync>,
}

impl Aligner {
    /// Create an aligner with capability descriptors resolved at startup
    pub fn new(config: Config, capabilities: Capabilities) -> Self {
        let segmenter = segmenter::for_strategy(config.segmentation);
        Aligner {
            config,
            capabilities,
            segmenter,
        }
    }

    /// Run one alignment. This is the public entry point: every failure is
    /// converted into a user-facing report with an absent artifact, and
    /// nothing propagates to the caller.
    pub async fn align(&self, request: &AlignmentRequest<'_>) -> AlignmentOutcome {
        match self.run(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Alignment failed: {:#}", e);
                AlignmentOutcome {
                    report: format!("Alignment failed: {:#}", e),
                    artifact: None,
                }
            }
        }
    }

    async fn run(&self, request: &AlignmentRequest<'_>) -> Result<AlignmentOutcome> {
        let audio_file = request.audio_file.ok_or(InputError::MissingAudio)?;
        if !audio_file.exists() {
            return Err(InputError::MissingAudio.into());
        }

        let text =
            TextExtractor::resolve(request.text_file, request.inline_text, self.capabilities)
                .await?;

        let target_secs = match self.config.mode {
            // Dummy mode assumes a fixed window and never touches the audio
            AlignmentMode::Dummy => DEFAULT_DURATION_SECS,
            _ => self.probed_duration(audio_file).await?,
        };

        let entries = match self.config.mode {
            AlignmentMode::Professional => self.professional_entries(&text, target_secs)?,
            AlignmentMode::Smart | AlignmentMode::Dummy => {
                self.equal_division_entries(&text, target_secs)?
            }
        };

        let artifact = srt_render::render(&entries);
        let report = self.build_report(&entries, target_secs, &artifact);
        info!(
            "{} alignment produced {} subtitle entries",
            self.config.mode.display_name(),
            entries.len()
        );

        Ok(AlignmentOutcome {
            report,
            artifact: Some(artifact),
        })
    }

    /// Transcode the input and probe its duration. The transcoded waveform
    /// is dropped (and its temp file removed) before returning.
    async fn probed_duration(&self, audio_file: &Path) -> Result<f64> {
        if !self.capabilities.ffmpeg {
            return Err(anyhow::anyhow!(
                "ffmpeg is not available. Install it to process audio files"
            ));
        }

        let waveform = MediaProbe::transcode_to_wav(audio_file).await?;

        if !self.capabilities.ffprobe {
            warn!(
                "ffprobe is not available, assuming {}s of audio",
                DEFAULT_DURATION_SECS
            );
            return Ok(DEFAULT_DURATION_SECS);
        }

        Ok(MediaProbe::duration_secs(waveform.path()).await)
    }

    /// Professional preset: sentence segmentation, per-sentence block
    /// formatting, reading-speed timing with compression fallback
    fn professional_entries(&self, text: &str, target_secs: f64) -> Result<Vec<TimedEntry>> {
        let sentences = self.segmenter.segment(text);
        if sentences.is_empty() {
            return Err(InputError::NoSentences.into());
        }

        let blocks: Vec<SubtitleBlock> = sentences
            .iter()
            .flat_map(|sentence| BlockFormatter::blocks_from_sentence(sentence))
            .collect();

        let estimator = DurationEstimator::with_bounds(
            f64::from(self.config.words_per_minute),
            self.config.timing.min_block_secs,
            self.config.timing.max_block_secs,
        );
        let synchronizer =
            TimelineSynchronizer::new(estimator, self.config.timing.compressed_min_secs);

        Ok(synchronizer.synchronize(&blocks, target_secs))
    }

    /// Smart/dummy preset: fixed 4-word chunking over the whole text and
    /// equal division of the target duration
    fn equal_division_entries(&self, text: &str, target_secs: f64) -> Result<Vec<TimedEntry>> {
        let chunks = BlockFormatter::fixed_chunks(text, WORDS_PER_LINE);
        if chunks.is_empty() {
            return Err(InputError::NoChunks.into());
        }

        let blocks = BlockFormatter::pair_chunks(&chunks);
        Ok(TimelineSynchronizer::distribute_evenly(
            &blocks,
            target_secs,
            self.config.timing.equal_division_min_secs,
        ))
    }

    /// Human-readable run summary in the report/artifact pair
    fn build_report(&self, entries: &[TimedEntry], target_secs: f64, artifact: &str) -> String {
        let mut report = format!("{} alignment complete!\n\n", self.config.mode.display_name());
        report.push_str("Statistics:\n");
        report.push_str(&format!("- Subtitle entries: {}\n", entries.len()));
        report.push_str(&format!("- Target duration: {:.2}s\n", target_secs));
        if self.config.mode == AlignmentMode::Professional {
            report.push_str(&format!(
                "- Reading speed: {} words per minute\n",
                self.config.words_per_minute
            ));
        }
        report.push_str(&format!(
            "- Segmentation: {}\n",
            self.config.segmentation
        ));
        report.push_str("\nGenerated SRT:\n");
        report.push_str(artifact);
        report
    }
}
