use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A single physical line of a source file, before comment removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    /// Line number (1-indexed).
    pub line_number: usize,
    pub text: String,
}

/// A line with comments removed.
///
/// Lines that end up empty are never constructed; the line number is the
/// one of the original physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedLine {
    pub line_number: usize,
    pub text: String,
}

impl CleanedLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// A source file loaded for one scan pass.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Lowercased extension without the dot (e.g., "sas").
    pub extension: String,
    pub lines: Vec<CodeLine>,
}

impl SourceFile {
    /// Read a file from disk.
    ///
    /// Content is decoded lossily so that files saved in legacy encodings
    /// (common for SAS programs) are still scanned.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(Self::from_source(path, &content))
    }

    /// Build a source file from in-memory content.
    ///
    /// A leading UTF-8 byte order mark is dropped.
    pub fn from_source(path: &Path, content: &str) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let lines = content
            .strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(content)
            .lines()
            .enumerate()
            .map(|(idx, text)| CodeLine {
                line_number: idx + 1,
                text: text.to_string(),
            })
            .collect();

        Self {
            path: path.to_path_buf(),
            extension,
            lines,
        }
    }
}
