//! Reassembly of multi-line DATA steps and CREATE TABLE statements.
//!
//! The merger consumes cleaned lines of one file and emits [`LogicalBlock`]s.
//! A block starts at the line holding its opening keyword and ends at the
//! first line containing a statement terminator. A statement that opens and
//! terminates on the same line is a one-line block.
//!
//! ## Overlapping openings
//!
//! Only one block is open at a time. When a line opens a statement of the
//! *other* kind while a block is open, the text before the new opening still
//! belongs to the open block: it is appended, and the block is closed as
//! terminated if that text holds a terminator, or flushed as unterminated
//! otherwise. Then the new block starts. An opening of the *same* kind is
//! treated as a continuation line. When one line holds both openings, the
//! keyword that appears first wins.

use std::sync::LazyLock;

use regex::Regex;

use super::data::{BlockType, CleanedLine, LogicalBlock};

pub const TERMINATOR: char = ';';
pub const MACRO_OPEN: &str = "%macro";
pub const MACRO_CLOSE: &str = "%mend";

static DATA_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*data\b").unwrap());

static SQL_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcreate\s+table\b").unwrap());

#[derive(Debug)]
struct OpenBlock {
    start_line: usize,
    combined: String,
    in_macro: bool,
}

impl OpenBlock {
    fn append(&mut self, text: &str) {
        self.combined.push(' ');
        self.combined.push_str(text.trim());
    }

    fn close(self, block_type: BlockType, terminated: bool) -> LogicalBlock {
        LogicalBlock {
            block_type,
            start_line: self.start_line,
            combined_text: self.combined,
            in_macro: self.in_macro,
            terminated,
        }
    }
}

#[derive(Debug, Default)]
enum MergeState {
    #[default]
    Idle,
    InData(OpenBlock),
    InSql(OpenBlock),
}

/// Per-file block merger. Create a new one for every file.
#[derive(Debug, Default)]
pub struct BlockMerger {
    state: MergeState,
    in_macro: bool,
    blocks: Vec<LogicalBlock>,
}

impl BlockMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge all cleaned lines of a file into logical blocks.
    pub fn merge(lines: &[CleanedLine]) -> Vec<LogicalBlock> {
        let mut merger = Self::new();
        for line in lines {
            merger.push(line);
        }
        merger.finish()
    }

    pub fn in_macro(&self) -> bool {
        self.in_macro
    }

    pub fn push(&mut self, line: &CleanedLine) {
        let text = line.text.as_str();
        self.update_macro_context(text);

        if let Some(opening) = find_opening(text) {
            let continues_open_block = matches!(
                (&self.state, opening.block_type),
                (MergeState::InData(_), BlockType::DataStep)
                    | (MergeState::InSql(_), BlockType::SqlCreateTable)
            );
            if !continues_open_block {
                self.end_open_block(&text[..opening.start]);
                self.open(opening.block_type, line, opening.keyword_end);
                return;
            }
        }

        self.append_to_open_block(text);
    }

    /// Flush any still-open block and return all emitted blocks in order.
    pub fn finish(mut self) -> Vec<LogicalBlock> {
        self.flush_unterminated();
        self.blocks
    }

    fn update_macro_context(&mut self, text: &str) {
        let lower = text.to_ascii_lowercase();
        if lower.contains(MACRO_OPEN) {
            self.in_macro = true;
        }
        if lower.contains(MACRO_CLOSE) {
            self.in_macro = false;
        }
    }

    fn open_block_type(&self) -> Option<BlockType> {
        match self.state {
            MergeState::Idle => None,
            MergeState::InData(_) => Some(BlockType::DataStep),
            MergeState::InSql(_) => Some(BlockType::SqlCreateTable),
        }
    }

    /// Append a line to the open block and close it on a terminator.
    fn append_to_open_block(&mut self, text: &str) {
        let Some(block_type) = self.open_block_type() else {
            return;
        };

        if let MergeState::InData(block) | MergeState::InSql(block) = &mut self.state {
            block.append(text);
        }

        if text.contains(TERMINATOR) {
            self.close(block_type, true);
        }
    }

    /// End the open block with the text that precedes a new opening.
    fn end_open_block(&mut self, tail: &str) {
        if !tail.trim().is_empty() {
            self.append_to_open_block(tail);
        }
        self.flush_unterminated();
    }

    fn open(&mut self, block_type: BlockType, line: &CleanedLine, keyword_end: usize) {
        let block = OpenBlock {
            start_line: line.line_number,
            combined: line.text.trim().to_string(),
            in_macro: self.in_macro,
        };

        if line.text[keyword_end..].contains(TERMINATOR) {
            self.blocks.push(block.close(block_type, true));
            return;
        }

        self.state = match block_type {
            BlockType::DataStep => MergeState::InData(block),
            BlockType::SqlCreateTable => MergeState::InSql(block),
        };
    }

    fn close(&mut self, block_type: BlockType, terminated: bool) {
        match std::mem::take(&mut self.state) {
            MergeState::Idle => {}
            MergeState::InData(block) | MergeState::InSql(block) => {
                self.blocks.push(block.close(block_type, terminated));
            }
        }
    }

    fn flush_unterminated(&mut self) {
        if let Some(block_type) = self.open_block_type() {
            self.close(block_type, false);
        }
    }
}

/// A statement opening keyword found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opening {
    block_type: BlockType,
    /// Byte offset where the keyword starts.
    start: usize,
    /// Byte offset right after the keyword.
    keyword_end: usize,
}

/// Find the earliest statement opening on a line.
fn find_opening(text: &str) -> Option<Opening> {
    let data = DATA_OPEN_REGEX.find(text).map(|m| Opening {
        block_type: BlockType::DataStep,
        start: m.start(),
        keyword_end: m.end(),
    });
    let sql = SQL_OPEN_REGEX.find(text).map(|m| Opening {
        block_type: BlockType::SqlCreateTable,
        start: m.start(),
        keyword_end: m.end(),
    });

    [data, sql].into_iter().flatten().min_by_key(|o| o.start)
}
