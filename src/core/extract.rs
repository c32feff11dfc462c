//! Extraction of qualified dataset names from logical blocks.
//!
//! - DATA steps: every `library.member` in the merged text, minus the
//!   transient library and the null dataset.
//! - CREATE TABLE: the single qualified name right after `create table`.
//!
//! Names embedded in quoted strings are not recognized as such and quoted
//! identifiers are not supported.

use std::sync::LazyLock;

use regex::Regex;

use super::data::{BlockType, DatasetReference, LogicalBlock, MacroContext};

static QUALIFIED_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)\b").unwrap()
});

// Lines are space-joined, so a name split after the dot reads `lib. member`.
static CREATE_TABLE_TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bcreate\s+table\s+([A-Za-z_][A-Za-z0-9_]*)\s*\.\s*([A-Za-z_][A-Za-z0-9_]*)\b",
    )
    .unwrap()
});

/// Names that never denote a permanent dataset.
#[derive(Debug, Clone)]
pub struct ExcludedNames {
    /// Temporary library (default `work`), compared case-insensitively.
    pub transient_library: String,
    /// Null dataset member (default `_null_`), compared case-insensitively.
    pub null_dataset: String,
}

impl Default for ExcludedNames {
    fn default() -> Self {
        Self {
            transient_library: "work".to_string(),
            null_dataset: "_null_".to_string(),
        }
    }
}

impl ExcludedNames {
    pub fn is_transient(&self, library: &str) -> bool {
        library.eq_ignore_ascii_case(&self.transient_library)
    }

    pub fn is_excluded(&self, library: &str, member: &str) -> bool {
        self.is_transient(library) || member.eq_ignore_ascii_case(&self.null_dataset)
    }
}

pub struct DatasetExtractor<'a> {
    source_file: &'a str,
    excluded: &'a ExcludedNames,
}

impl<'a> DatasetExtractor<'a> {
    pub fn new(source_file: &'a str, excluded: &'a ExcludedNames) -> Self {
        Self {
            source_file,
            excluded,
        }
    }

    /// Extract references from all blocks of a file, in block order.
    pub fn extract_all(&self, blocks: &[LogicalBlock]) -> Vec<DatasetReference> {
        blocks
            .iter()
            .flat_map(|block| self.extract(block))
            .collect()
    }

    pub fn extract(&self, block: &LogicalBlock) -> Vec<DatasetReference> {
        let names = match block.block_type {
            BlockType::DataStep => self.data_step_names(&block.combined_text),
            BlockType::SqlCreateTable => self
                .create_table_name(&block.combined_text)
                .into_iter()
                .collect(),
        };

        names
            .into_iter()
            .map(|dataset_name| DatasetReference {
                source_file: self.source_file.to_string(),
                line_number: block.start_line,
                block_type: block.block_type,
                dataset_name,
                context: MacroContext::from_in_macro(block.in_macro),
            })
            .collect()
    }

    fn data_step_names(&self, text: &str) -> Vec<String> {
        QUALIFIED_NAME_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let library = caps.get(1)?.as_str();
                let member = caps.get(2)?.as_str();
                (!self.excluded.is_excluded(library, member))
                    .then(|| format!("{}.{}", library, member))
            })
            .collect()
    }

    fn create_table_name(&self, text: &str) -> Option<String> {
        let caps = CREATE_TABLE_TARGET_REGEX.captures(text)?;
        let library = caps.get(1)?.as_str();
        let member = caps.get(2)?.as_str();
        (!self.excluded.is_excluded(library, member)).then(|| format!("{}.{}", library, member))
    }
}
