use std::path::Path;
use std::time::Duration;
use anyhow::{anyhow, Result};
use log::{debug, error, warn};
use tempfile::TempPath;
use tokio::process::Command;

use crate::app_config::Capabilities;
use crate::errors::ExternalToolError;

// @module: Audio transcoding and duration probing via ffmpeg/ffprobe

/// Duration assumed when no probe result is available
pub const DEFAULT_DURATION_SECS: f64 = 60.0;

// @const: Time budgets for external media tools
const TRANSCODE_TIMEOUT_SECS: u64 = 60;
const PROBE_TIMEOUT_SECS: u64 = 10;
const VERSION_CHECK_TIMEOUT_SECS: u64 = 5;

/// Transcoded waveform backed by a temporary file.
///
/// The file is removed when this value is dropped, on success and failure
/// paths alike; removal failures are ignored.
pub struct TranscodedAudio {
    temp: TempPath,
}

impl TranscodedAudio {
    /// Path to the normalized WAV file
    pub fn path(&self) -> &Path {
        &self.temp
    }
}

/// Wrappers around the external media tools
pub struct MediaProbe;

impl MediaProbe {
    /// Convert any audio/video container to a normalized mono 22.05kHz
    /// 16-bit PCM waveform
    pub async fn transcode_to_wav(input: &Path) -> Result<TranscodedAudio> {
        if !input.exists() {
            return Err(anyhow!("Audio file does not exist: {:?}", input));
        }

        let temp = tempfile::Builder::new()
            .prefix("subcue_")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| anyhow!("Failed to create temporary WAV file: {}", e))?
            .into_temp_path();

        let ffmpeg_future = Command::new("ffmpeg")
            .args([
                "-y",                       // Overwrite the placeholder temp file
                "-i", input.to_str().unwrap_or_default(),
                "-acodec", "pcm_s16le",
                "-ar", "22050",
                "-ac", "1",
                temp.to_str().unwrap_or_default(),
            ])
            .output();

        let timeout = Duration::from_secs(TRANSCODE_TIMEOUT_SECS);
        let output = tokio::select! {
            result = ffmpeg_future => {
                result.map_err(|e| ExternalToolError::Launch {
                    tool: "ffmpeg".to_string(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(timeout) => {
                return Err(ExternalToolError::Timeout {
                    tool: "ffmpeg".to_string(),
                    seconds: TRANSCODE_TIMEOUT_SECS,
                }.into());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let filtered = Self::filter_ffmpeg_stderr(&stderr);
            error!("Audio conversion failed: {}", filtered);
            return Err(ExternalToolError::Failed {
                tool: "ffmpeg".to_string(),
                message: filtered,
            }
            .into());
        }

        debug!("Transcoded {:?} to normalized WAV", input);
        Ok(TranscodedAudio { temp })
    }

    /// Probe the duration of an audio file in seconds.
    ///
    /// Probing failures degrade gracefully to [`DEFAULT_DURATION_SECS`]
    /// rather than erroring.
    pub async fn duration_secs(audio_path: &Path) -> f64 {
        match Self::try_duration_secs(audio_path).await {
            Ok(secs) => secs,
            Err(e) => {
                warn!(
                    "Duration probe failed ({}), assuming {}s",
                    e, DEFAULT_DURATION_SECS
                );
                DEFAULT_DURATION_SECS
            }
        }
    }

    async fn try_duration_secs(audio_path: &Path) -> Result<f64> {
        let ffprobe_future = Command::new("ffprobe")
            .args([
                "-v", "quiet",
                "-show_entries", "format=duration",
                "-of", "csv=p=0",
                audio_path.to_str().unwrap_or_default(),
            ])
            .output();

        let timeout = Duration::from_secs(PROBE_TIMEOUT_SECS);
        let output = tokio::select! {
            result = ffprobe_future => {
                result.map_err(|e| ExternalToolError::Launch {
                    tool: "ffprobe".to_string(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(timeout) => {
                return Err(ExternalToolError::Timeout {
                    tool: "ffprobe".to_string(),
                    seconds: PROBE_TIMEOUT_SECS,
                }.into());
            }
        };

        if !output.status.success() {
            return Err(ExternalToolError::Failed {
                tool: "ffprobe".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let secs: f64 = stdout
            .trim()
            .parse()
            .map_err(|_| anyhow!("Unparseable ffprobe duration: {:?}", stdout.trim()))?;

        if secs <= 0.0 {
            return Err(anyhow!("ffprobe reported non-positive duration: {}", secs));
        }

        Ok(secs)
    }

    /// Probe which external collaborators are on PATH. Resolved once at
    /// startup; the result is handed to the orchestrator.
    pub async fn probe_capabilities() -> Capabilities {
        Capabilities {
            ffmpeg: Self::tool_available("ffmpeg", "-version").await,
            ffprobe: Self::tool_available("ffprobe", "-version").await,
            pdftotext: Self::tool_available("pdftotext", "-v").await,
            pandoc: Self::tool_available("pandoc", "--version").await,
        }
    }

    /// Check whether a tool responds to its version flag
    async fn tool_available(tool: &str, version_arg: &str) -> bool {
        let future = Command::new(tool).arg(version_arg).output();
        tokio::select! {
            result = future => result.is_ok(),
            _ = tokio::time::sleep(Duration::from_secs(VERSION_CHECK_TIMEOUT_SECS)) => false,
        }
    }

    /// Filter ffmpeg stderr to only show meaningful error lines, stripping
    /// the version banner, build configuration, and stream metadata noise.
    pub fn filter_ffmpeg_stderr(stderr: &str) -> String {
        let noise_prefixes = [
            "ffmpeg version",
            "  built with",
            "  configuration:",
            "  lib",
            "Input #",
            "  Metadata:",
            "  Duration:",
            "  Stream #",
            "      Metadata:",
            "Output #",
            "Stream mapping:",
            "Press [q]",
            "size=",
        ];

        let meaningful: Vec<&str> = stderr
            .lines()
            .filter(|line| {
                let trimmed = line.trim_end();
                if trimmed.trim().is_empty() {
                    return false;
                }
                !noise_prefixes.iter().any(|p| trimmed.starts_with(p))
            })
            .collect();

        if meaningful.is_empty() {
            "unknown ffmpeg error (stderr was empty after filtering)".to_string()
        } else {
            meaningful.join("\n")
        }
    }
}
