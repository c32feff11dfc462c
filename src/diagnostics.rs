//! Non-fatal conditions encountered while scanning.
//!
//! A diagnostic never aborts a scan; the affected file is skipped or its
//! partial statement is still extracted. Only an unusable root path is fatal,
//! and that is reported as an error instead.

use std::fmt;

use crate::core::BlockType;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// The file exists but could not be read; it was skipped.
    FileUnreadable { reason: String },
    /// A statement was still open when the file ended or another statement
    /// opened; its partial text was extracted anyway.
    UnterminatedBlock {
        block_type: BlockType,
        start_line: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Diagnostic {
    pub file_path: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn file_unreadable(file_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            kind: DiagnosticKind::FileUnreadable {
                reason: reason.into(),
            },
        }
    }

    pub fn unterminated_block(
        file_path: impl Into<String>,
        block_type: BlockType,
        start_line: usize,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            kind: DiagnosticKind::UnterminatedBlock {
                block_type,
                start_line,
            },
        }
    }

    pub fn is_skipped_file(&self) -> bool {
        matches!(self.kind, DiagnosticKind::FileUnreadable { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::FileUnreadable { reason } => {
                write!(f, "{}: skipped, {}", self.file_path, reason)
            }
            DiagnosticKind::UnterminatedBlock {
                block_type,
                start_line,
            } => write!(
                f,
                "{}:{}: {} statement has no terminating ';'",
                self.file_path, start_line, block_type
            ),
        }
    }
}
