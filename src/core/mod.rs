//! Core scanning engine.
//!
//! ## Pipeline
//!
//! 1. **Enumeration** (`file_scanner`): root path → sorted candidate files
//! 2. **Comment removal** (`comments`): raw lines → cleaned lines
//! 3. **Block merging** (`blocks`): cleaned lines → DATA / CREATE TABLE blocks
//! 4. **Extraction** (`extract`): blocks → qualified dataset references
//! 5. **Reporting** (`report`): all references → sorted, deduplicated report
//!
//! Steps 2-4 run per file and share no state across files, so `context`
//! runs them in parallel and performs step 5 once at the end.

pub mod blocks;
pub mod comments;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod report;

pub use blocks::BlockMerger;
pub use comments::CommentStripper;
pub use context::{FileScan, ScanContext, ScanOutcome, scan_path, scan_source};
pub use data::*;
pub use extract::{DatasetExtractor, ExcludedNames};
pub use report::{ReportRow, ScanReport, display_name};
