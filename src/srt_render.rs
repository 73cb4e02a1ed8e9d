use std::fmt;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};

use crate::block_formatter::SubtitleBlock;

// @module: SRT serialization and time formatting

/// One timed subtitle entry: 1-based index, start/end in seconds, block text
#[derive(Debug, Clone)]
pub struct TimedEntry {
    // @field: Sequence number, starting at 1
    pub index: usize,

    // @field: Start time in seconds
    pub start_secs: f64,

    // @field: End time in seconds
    pub end_secs: f64,

    // @field: Subtitle text block
    pub block: SubtitleBlock,
}

impl TimedEntry {
    /// Creates a new timed entry
    pub fn new(index: usize, start_secs: f64, end_secs: f64, block: SubtitleBlock) -> Self {
        TimedEntry {
            index,
            start_secs,
            end_secs,
            block,
        }
    }

    /// On-screen duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_secs)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_secs)
    }

    /// Format a time in seconds as an SRT timestamp (HH:MM:SS,mmm).
    ///
    /// The millisecond component is truncated, never rounded up. A one
    /// nanosecond nudge is applied before truncating because f64 stores most
    /// decimal fractions just below their nominal value; without it 3661.999
    /// would format as ,998.
    pub fn format_timestamp(seconds: f64) -> String {
        let total_ms = (seconds * 1000.0 + 1e-6).floor().max(0.0) as u64;

        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let secs = (total_ms % 60_000) / 1_000;
        let millis = total_ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
    }
}

impl fmt::Display for TimedEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.block.line1)?;
        if self.block.has_second_line() {
            writeln!(f, "{}", self.block.line2)?;
        }
        writeln!(f)
    }
}

/// Render entries to SRT text. Pure function of the entries; serializing the
/// same entries twice yields identical bytes.
pub fn render(entries: &[TimedEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        // writing into a String cannot fail
        let _ = write!(output, "{}", entry);
    }
    output
}

/// Write entries to an SRT file, creating parent directories as needed
pub fn write_to_file<P: AsRef<Path>>(entries: &[TimedEntry], path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

    file.write_all(render(entries).as_bytes())
        .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

    Ok(())
}
