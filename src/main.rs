// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::aligner::{Aligner, AlignmentRequest};
use crate::app_config::{AlignmentMode, Config, SegmentationStrategy};
use crate::media_probe::MediaProbe;

mod aligner;
mod app_config;
mod block_formatter;
mod duration_estimator;
mod errors;
mod media_probe;
mod segmenter;
mod srt_render;
mod synchronizer;
mod text_extractor;

/// CLI Wrapper for AlignmentMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliAlignmentMode {
    Professional,
    Smart,
    Dummy,
}

impl From<CliAlignmentMode> for AlignmentMode {
    fn from(cli_mode: CliAlignmentMode) -> Self {
        match cli_mode {
            CliAlignmentMode::Professional => AlignmentMode::Professional,
            CliAlignmentMode::Smart => AlignmentMode::Smart,
            CliAlignmentMode::Dummy => AlignmentMode::Dummy,
        }
    }
}

/// CLI Wrapper for SegmentationStrategy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSegmentation {
    Unicode,
    Regex,
}

impl From<CliSegmentation> for SegmentationStrategy {
    fn from(cli_strategy: CliSegmentation) -> Self {
        match cli_strategy {
            CliSegmentation::Unicode => SegmentationStrategy::Unicode,
            CliSegmentation::Regex => SegmentationStrategy::Regex,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate subtitle timing and write an SRT file (default command)
    #[command(alias = "align")]
    Align(AlignArgs),

    /// Generate shell completions for subcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Audio or video file to time the transcript against
    #[arg(value_name = "AUDIO_PATH")]
    audio_path: PathBuf,

    /// Transcript file (.txt, .pdf, .docx)
    #[arg(short, long)]
    text_file: Option<PathBuf>,

    /// Inline transcript text; wins over --text-file when both are given
    #[arg(short = 'x', long = "text")]
    inline_text: Option<String>,

    /// Alignment mode
    #[arg(short, long, value_enum)]
    mode: Option<CliAlignmentMode>,

    /// Reading speed in words per minute (150-180, professional mode)
    #[arg(short, long)]
    wpm: Option<u32>,

    /// Sentence segmentation strategy (professional mode)
    #[arg(short, long, value_enum)]
    segmentation: Option<CliSegmentation>,

    /// Output SRT path (defaults to the audio path with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subcue - subtitle cue timing estimation
///
/// Estimates subtitle timing for a text transcript against an audio/video
/// file's duration and writes an SRT file. No acoustic alignment is
/// performed; timing is derived from word counts and reading speed.
#[derive(Parser, Debug)]
#[command(name = "subcue")]
#[command(version = "0.1.0")]
#[command(about = "Subtitle timing estimation to SRT")]
#[command(long_about = "subcue estimates subtitle timing for a transcript against an audio file and writes an SRT file.

EXAMPLES:
    subcue lecture.mp3 -t transcript.txt              # Professional alignment
    subcue lecture.mp3 -x \"Hello world! This is it.\"  # Inline transcript
    subcue -m smart talk.mp4 -t talk.txt              # Equal-division timing
    subcue -m dummy clip.wav -t clip.txt              # Fixed 60s window, no probe
    subcue -w 150 slow.mp3 -t slow.txt                # Slower reading speed
    subcue completions bash > subcue.bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

MODES:
    professional - sentence segmentation, 1.5-6s per subtitle from reading
                   speed, compressed to fit the probed audio duration
    smart        - fixed 4-word lines, audio duration divided equally
    dummy        - like smart but assumes a fixed 60s window")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Audio or video file to time the transcript against
    #[arg(value_name = "AUDIO_PATH")]
    audio_path: Option<PathBuf>,

    /// Transcript file (.txt, .pdf, .docx)
    #[arg(short, long)]
    text_file: Option<PathBuf>,

    /// Inline transcript text; wins over --text-file when both are given
    #[arg(short = 'x', long = "text")]
    inline_text: Option<String>,

    /// Alignment mode
    #[arg(short, long, value_enum)]
    mode: Option<CliAlignmentMode>,

    /// Reading speed in words per minute (150-180, professional mode)
    #[arg(short, long)]
    wpm: Option<u32>,

    /// Sentence segmentation strategy (professional mode)
    #[arg(short, long, value_enum)]
    segmentation: Option<CliSegmentation>,

    /// Output SRT path (defaults to the audio path with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcue", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Align(args)) => run_align(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let audio_path = cli.audio_path.ok_or_else(|| {
                anyhow!("AUDIO_PATH is required when no subcommand is specified")
            })?;

            let align_args = AlignArgs {
                audio_path,
                text_file: cli.text_file,
                inline_text: cli.inline_text,
                mode: cli.mode,
                wpm: cli.wpm,
                segmentation: cli.segmentation,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_align(align_args).await
        }
    }
}

async fn run_align(options: AlignArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(to_level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(mode) = &options.mode {
        config.mode = mode.clone().into();
    }
    if let Some(wpm) = options.wpm {
        config.words_per_minute = wpm;
    }
    if let Some(strategy) = &options.segmentation {
        config.segmentation = strategy.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Resolve external tool availability once
    let capabilities = MediaProbe::probe_capabilities().await;
    if !capabilities.ffmpeg && config.mode != AlignmentMode::Dummy {
        warn!("ffmpeg not found on PATH; audio processing will fail");
    }
    if !capabilities.ffprobe && config.mode == AlignmentMode::Professional {
        warn!("ffprobe not found on PATH; a default 60s duration will be assumed");
    }

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| options.audio_path.with_extension("srt"));

    let aligner = Aligner::new(config, capabilities);
    let request = AlignmentRequest {
        audio_file: Some(&options.audio_path),
        text_file: options.text_file.as_deref(),
        inline_text: options.inline_text.as_deref(),
    };

    let outcome = aligner.align(&request).await;
    println!("{}", outcome.report);

    match outcome.artifact {
        Some(_) => {
            let entries_written = write_outcome(&outcome, &output_path)?;
            info!("Wrote {} bytes of SRT to {:?}", entries_written, output_path);
            Ok(())
        }
        None => Err(anyhow!("Alignment produced no SRT artifact")),
    }
}

/// Write the SRT artifact to disk, returning the byte count
fn write_outcome(outcome: &aligner::AlignmentOutcome, output_path: &Path) -> Result<usize> {
    let artifact = outcome
        .artifact
        .as_ref()
        .ok_or_else(|| anyhow!("No artifact to write"))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create output directory: {:?}", parent))?;
        }
    }

    std::fs::write(output_path, artifact)
        .context(format!("Failed to write SRT file: {:?}", output_path))?;

    Ok(artifact.len())
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
