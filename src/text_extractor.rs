use std::path::Path;
use std::time::Duration;
use anyhow::{anyhow, Context, Result};
use log::debug;
use tokio::process::Command;

use crate::app_config::Capabilities;
use crate::errors::{ExternalToolError, InputError};

// @module: Transcript text resolution from files or inline input

// @const: Time budget for external text extraction tools
const EXTRACT_TIMEOUT_SECS: u64 = 30;

/// Resolves the transcript text from a file or an inline string
pub struct TextExtractor;

impl TextExtractor {
    /// Resolve the transcript text. Inline text wins when both sources are
    /// supplied; a missing text source is an input error.
    pub async fn resolve(
        text_file: Option<&Path>,
        inline_text: Option<&str>,
        capabilities: Capabilities,
    ) -> Result<String> {
        if let Some(inline) = inline_text {
            let trimmed = inline.trim();
            if !trimmed.is_empty() {
                debug!("Using inline text ({} chars)", trimmed.len());
                return Ok(trimmed.to_string());
            }
        }

        match text_file {
            Some(path) => Self::extract_from_file(path, capabilities).await,
            None => Err(InputError::MissingText.into()),
        }
    }

    /// Extract text from a file based on its extension
    pub async fn extract_from_file(path: &Path, capabilities: Capabilities) -> Result<String> {
        if !path.exists() {
            return Err(anyhow!("Text file does not exist: {:?}", path));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file: {:?}", path)),
            "pdf" => {
                if !capabilities.pdftotext {
                    return Err(anyhow!(
                        "pdftotext is not available. Install poppler-utils to read PDF files"
                    ));
                }
                Self::extract_via_tool(
                    "pdftotext",
                    &[path.to_str().unwrap_or_default(), "-"],
                    path,
                )
                .await
            }
            "docx" => {
                if !capabilities.pandoc {
                    return Err(anyhow!(
                        "pandoc is not available. Install pandoc to read DOCX files"
                    ));
                }
                Self::extract_via_tool(
                    "pandoc",
                    &["-t", "plain", path.to_str().unwrap_or_default()],
                    path,
                )
                .await
            }
            other => Err(InputError::UnsupportedFormat(other.to_string()).into()),
        }
    }

    /// Run an external extraction tool that writes plain text to stdout
    async fn extract_via_tool(tool: &str, args: &[&str], path: &Path) -> Result<String> {
        let extract_future = Command::new(tool).args(args).output();

        let timeout = Duration::from_secs(EXTRACT_TIMEOUT_SECS);
        let output = tokio::select! {
            result = extract_future => {
                result.map_err(|e| ExternalToolError::Launch {
                    tool: tool.to_string(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(timeout) => {
                return Err(ExternalToolError::Timeout {
                    tool: tool.to_string(),
                    seconds: EXTRACT_TIMEOUT_SECS,
                }.into());
            }
        };

        if !output.status.success() {
            return Err(ExternalToolError::Failed {
                tool: tool.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        if text.trim().is_empty() {
            return Err(anyhow!("{} produced no text for {:?}", tool, path));
        }

        debug!("Extracted {} chars from {:?} via {}", text.len(), path, tool);
        Ok(text)
    }
}
