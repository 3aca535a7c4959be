//! Command implementations.

use std::io::{IsTerminal, Read};

use aichecker_core::markdown;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

pub mod check;
pub mod info;
pub mod readability;
pub mod render;
pub mod repetition;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod spelling;
pub mod style;

/// Input problems reported to the user rather than logged as failures.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Nothing to analyze after reading (and optionally stripping) input.
    #[error("no input text provided; pass a FILE or pipe text on stdin")]
    Empty,

    /// Input exceeds the configured size limit.
    #[error("input too large: {source_name} is {size} bytes (limit: {max} bytes)")]
    TooLarge {
        /// File path, or "stdin".
        source_name: String,
        /// Size in bytes (a lower bound for stdin).
        size: u64,
        /// Configured limit in bytes.
        max: usize,
    },
}

/// Where to read text from, shared by every analysis command.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to analyze (reads stdin when omitted).
    pub file: Option<Utf8PathBuf>,

    /// Strip markdown before analysis (automatic for .md files).
    #[arg(long)]
    pub strip_markdown: bool,
}

impl InputArgs {
    fn wants_markdown_stripping(&self) -> bool {
        self.strip_markdown
            || self
                .file
                .as_deref()
                .is_some_and(|f| f.extension() == Some("md"))
    }

    /// Label for messages and spans.
    pub fn source_name(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| "stdin".to_string(), ToString::to_string)
    }
}

/// Read the text to analyze, ready for the analyzers.
///
/// Applies the size limit, strips markdown when asked, and rejects input
/// that is empty or whitespace-only with [`InputError::Empty`].
pub fn load_text(input: &InputArgs, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let raw = match input.file.as_deref() {
        Some(path) => read_input_file(path, max_bytes)?,
        None => read_stdin(max_bytes)?,
    };

    let text = if input.wants_markdown_stripping() {
        markdown::strip_to_prose(&raw)
    } else {
        raw
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty.into());
    }
    Ok(text)
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes
        && metadata.len() > max as u64
    {
        return Err(InputError::TooLarge {
            source_name: path.to_string(),
            size: metadata.len(),
            max,
        }
        .into());
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read all of stdin, up to the size limit.
///
/// An interactive terminal counts as no input instead of blocking.
fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    read_limited(stdin.lock(), max_bytes, "stdin")
}

fn read_limited<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
    source_name: &str,
) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            reader
                .take(max as u64 + 1)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {source_name}"))?;
            if buf.len() > max {
                return Err(InputError::TooLarge {
                    source_name: source_name.to_string(),
                    size: buf.len() as u64,
                    max,
                }
                .into());
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {source_name}"))?;
        }
    }
    String::from_utf8(buf).with_context(|| format!("{source_name} is not valid UTF-8"))
}
