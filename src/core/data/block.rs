use std::fmt;

use serde::Serialize;

/// Kind of statement a dataset was created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BlockType {
    /// `data lib.member; ...`
    DataStep,
    /// `proc sql; create table lib.member as ...`
    SqlCreateTable,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::DataStep => write!(f, "DataStep"),
            BlockType::SqlCreateTable => write!(f, "SqlCreateTable"),
        }
    }
}

/// One DATA step or CREATE TABLE statement, merged across physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalBlock {
    pub block_type: BlockType,
    /// First physical line of the statement.
    pub start_line: usize,
    /// Cleaned lines from the opening keyword up to the terminator, joined by a space.
    pub combined_text: String,
    /// Whether the opening line fell inside a macro definition.
    pub in_macro: bool,
    /// False when the file ended (or another statement opened) before a `;` was seen.
    pub terminated: bool,
}
