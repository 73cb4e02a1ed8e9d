/*!
 * Error types for the subcue application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised while resolving input text or validating the request
#[derive(Error, Debug)]
pub enum InputError {
    /// No audio file was supplied
    #[error("No valid audio file was provided. Please supply an audio or video file")]
    MissingAudio,

    /// No text was supplied through either channel
    #[error("No text provided. Please supply a text file or inline text")]
    MissingText,

    /// The text file has an extension we cannot extract from
    #[error("Unsupported text format '{0}'. Supported formats: txt, pdf, docx")]
    UnsupportedFormat(String),

    /// Segmentation produced nothing to time
    #[error("No sentences found in the text")]
    NoSentences,

    /// Chunking produced nothing to time
    #[error("No text chunks found in the text")]
    NoChunks,
}

/// Errors from external command-line collaborators (ffmpeg, ffprobe, pdftotext, pandoc)
#[derive(Error, Debug)]
pub enum ExternalToolError {
    /// The tool could not be started at all
    #[error("Failed to execute {tool}: {message}")]
    Launch {
        /// Tool binary name
        tool: String,
        /// Underlying OS error text
        message: String,
    },

    /// The tool ran but reported failure
    #[error("{tool} failed: {message}")]
    Failed {
        /// Tool binary name
        tool: String,
        /// Filtered diagnostic output
        message: String,
    },

    /// The tool exceeded its time budget
    #[error("{tool} timed out after {seconds} seconds")]
    Timeout {
        /// Tool binary name
        tool: String,
        /// Budget that was exceeded
        seconds: u64,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from input resolution
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error from an external tool
    #[error("External tool error: {0}")]
    Tool(#[from] ExternalToolError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
