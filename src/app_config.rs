use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Assumed reading speed in words per minute
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    /// Alignment mode preset
    #[serde(default)]
    pub mode: AlignmentMode,

    /// Sentence segmentation strategy
    #[serde(default)]
    pub segmentation: SegmentationStrategy,

    /// Timing constraints
    #[serde(default)]
    pub timing: TimingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            mode: AlignmentMode::default(),
            segmentation: SegmentationStrategy::default(),
            timing: TimingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.mode == AlignmentMode::Professional
            && !(MIN_WORDS_PER_MINUTE..=MAX_WORDS_PER_MINUTE).contains(&self.words_per_minute)
        {
            return Err(anyhow!(
                "words_per_minute must be between {} and {}, got {}",
                MIN_WORDS_PER_MINUTE,
                MAX_WORDS_PER_MINUTE,
                self.words_per_minute
            ));
        }

        self.timing.validate()
    }
}

/// Lower bound of the supported reading-speed range
pub const MIN_WORDS_PER_MINUTE: u32 = 150;

/// Upper bound of the supported reading-speed range
pub const MAX_WORDS_PER_MINUTE: u32 = 180;

/// Alignment mode preset
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    // @mode: Reading-speed timing with sentence segmentation
    #[default]
    Professional,
    // @mode: Equal division of the probed audio duration
    Smart,
    // @mode: Equal division of a fixed 60s window, no audio analysis
    Dummy,
}

impl AlignmentMode {
    // @returns: Capitalized mode name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Professional => "Professional",
            Self::Smart => "Smart",
            Self::Dummy => "Dummy",
        }
    }

    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Professional => "professional".to_string(),
            Self::Smart => "smart".to_string(),
            Self::Dummy => "dummy".to_string(),
        }
    }
}

impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for AlignmentMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "smart" => Ok(Self::Smart),
            "dummy" => Ok(Self::Dummy),
            _ => Err(anyhow!("Invalid alignment mode: {}", s)),
        }
    }
}

/// Sentence segmentation strategy, resolved once at startup
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationStrategy {
    /// UAX #29 sentence boundaries (preferred)
    #[default]
    Unicode,
    /// Split after sentence-terminal punctuation followed by spaces
    Regex,
}

impl std::fmt::Display for SegmentationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unicode => write!(f, "unicode"),
            Self::Regex => write!(f, "regex"),
        }
    }
}

impl std::str::FromStr for SegmentationStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "regex" => Ok(Self::Regex),
            _ => Err(anyhow!("Invalid segmentation strategy: {}", s)),
        }
    }
}

/// Timing constraints applied by the synchronizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TimingConfig {
    /// Minimum on-screen duration per subtitle in seconds
    #[serde(default = "default_min_block_secs")]
    pub min_block_secs: f64,

    /// Maximum on-screen duration per subtitle in seconds
    #[serde(default = "default_max_block_secs")]
    pub max_block_secs: f64,

    /// Looser per-subtitle floor used when the timeline is compressed
    #[serde(default = "default_compressed_min_secs")]
    pub compressed_min_secs: f64,

    /// Per-subtitle floor used by the equal-division modes (smart/dummy)
    #[serde(default = "default_equal_division_min_secs")]
    pub equal_division_min_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_block_secs: default_min_block_secs(),
            max_block_secs: default_max_block_secs(),
            compressed_min_secs: default_compressed_min_secs(),
            equal_division_min_secs: default_equal_division_min_secs(),
        }
    }
}

impl TimingConfig {
    /// Check that the duration bounds form a usable range
    pub fn validate(&self) -> Result<()> {
        if self.min_block_secs <= 0.0 || self.compressed_min_secs <= 0.0 {
            return Err(anyhow!("Subtitle duration floors must be positive"));
        }
        if self.max_block_secs < self.min_block_secs {
            return Err(anyhow!(
                "max_block_secs ({}) must not be below min_block_secs ({})",
                self.max_block_secs,
                self.min_block_secs
            ));
        }
        if self.equal_division_min_secs <= 0.0 {
            return Err(anyhow!("equal_division_min_secs must be positive"));
        }
        Ok(())
    }
}

/// Availability of optional external collaborators, probed once at startup
/// and passed into the orchestrator instead of re-checked ad hoc.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// ffmpeg is on PATH (audio transcoding)
    pub ffmpeg: bool,
    /// ffprobe is on PATH (duration probing)
    pub ffprobe: bool,
    /// pdftotext is on PATH (PDF text extraction)
    pub pdftotext: bool,
    /// pandoc is on PATH (DOCX text extraction)
    pub pandoc: bool,
}

impl Default for Capabilities {
    /// Assume everything is present; used by tests that never shell out
    fn default() -> Self {
        Self {
            ffmpeg: true,
            ffprobe: true,
            pdftotext: true,
            pandoc: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_words_per_minute() -> u32 {
    165
}

fn default_min_block_secs() -> f64 {
    1.5
}

fn default_max_block_secs() -> f64 {
    6.0
}

fn default_compressed_min_secs() -> f64 {
    1.0
}

fn default_equal_division_min_secs() -> f64 {
    2.0
}
