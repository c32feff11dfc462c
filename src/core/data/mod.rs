//! Core data types used across all pipeline stages.
//!
//! This module defines the fundamental data structures flowing from file
//! reading through comment stripping, block merging and extraction.
//!
//! ## Module Structure
//!
//! - `source`: Source file and line types (SourceFile, CodeLine, CleanedLine)
//! - `block`: Merged statement types (BlockType, LogicalBlock)
//! - `reference`: Extraction output (DatasetReference, MacroContext)

pub mod block;
pub mod reference;
pub mod source;

pub use block::{BlockType, LogicalBlock};
pub use reference::{DatasetReference, MacroContext};
pub use source::{CleanedLine, CodeLine, SourceFile};
