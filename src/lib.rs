//! dsscan - permanent dataset finder for SAS code
//!
//! dsscan is a CLI tool and library that scans SAS programs for DATA steps and
//! PROC SQL `CREATE TABLE` statements and reports every permanent
//! (`library.member`) dataset they create, with the file, line, statement kind
//! and whether the statement sits inside a macro definition.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine (comment removal, block merging, extraction, report)
//! - `diagnostics`: Non-fatal conditions reported during a scan

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
