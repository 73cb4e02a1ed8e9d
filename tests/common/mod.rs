/*!
 * Common test utilities for the subcue test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;
use subcue::block_formatter::SubtitleBlock;

/// Eleven words across two sentences, enough to exercise every block shape
pub const SAMPLE_TRANSCRIPT: &str =
    "Hello world! This is a test of the professional SRT generator.";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a block holding `count` synthetic words, split 4 / remainder
/// across the two lines the way the formatter would
pub fn block_of_words(count: usize) -> SubtitleBlock {
    let words: Vec<String> = (0..count).map(|i| format!("word{}", i)).collect();
    let split = count.min(4);
    SubtitleBlock::new(words[..split].join(" "), words[split..].join(" "))
}
