//! Comment removal for SAS source lines.
//!
//! Handles `/* ... */` block comments (including ones spanning several lines)
//! and `*` statement comments at the start of a line. Only the first comment
//! span on a physical line is removed; a second span on the same line is left
//! in place.

use super::data::{CleanedLine, CodeLine};

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "*";

/// Line-by-line comment stripper. One instance per file.
#[derive(Debug, Default)]
pub struct CommentStripper {
    in_block_comment: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip all lines of a file, dropping the ones that end up empty.
    pub fn strip_lines(lines: &[CodeLine]) -> Vec<CleanedLine> {
        let mut stripper = Self::new();
        lines
            .iter()
            .filter_map(|line| {
                stripper
                    .strip_line(&line.text)
                    .map(|text| CleanedLine::new(line.line_number, text))
            })
            .collect()
    }

    /// Strip one line. Returns `None` when nothing but comments or whitespace remains.
    pub fn strip_line(&mut self, line: &str) -> Option<String> {
        let remainder = if self.in_block_comment {
            let end = line.find(BLOCK_CLOSE)?;
            self.in_block_comment = false;
            &line[end + BLOCK_CLOSE.len()..]
        } else {
            line
        };

        let cleaned = match remainder.find(BLOCK_OPEN) {
            Some(start) => {
                let after_open = start + BLOCK_OPEN.len();
                match remainder[after_open..].find(BLOCK_CLOSE) {
                    Some(rel_end) => {
                        let end = after_open + rel_end + BLOCK_CLOSE.len();
                        format!("{}{}", &remainder[..start], &remainder[end..])
                    }
                    None => {
                        self.in_block_comment = true;
                        remainder[..start].to_string()
                    }
                }
            }
            None => remainder.to_string(),
        };

        let trimmed = cleaned.trim_start();
        if trimmed.is_empty()
            || trimmed.starts_with(BLOCK_CLOSE)
            || trimmed.starts_with(LINE_COMMENT)
        {
            return None;
        }

        Some(cleaned.trim_end().to_string())
    }

    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }
}
