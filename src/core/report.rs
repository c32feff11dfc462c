//! Final merge of per-file references into the delivered report.
//!
//! Runs once, single-threaded, after all files are processed so that
//! ordering and ids do not depend on file processing order.

use std::path::Path;

use serde::Serialize;

use super::data::{BlockType, DatasetReference, MacroContext};
use super::extract::ExcludedNames;

/// One row of the scan report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: usize,
    pub code_file: String,
    pub dataset: String,
    pub line_num: usize,
    pub block_type: BlockType,
    pub context: MacroContext,
}

/// Sorted, deduplicated dataset references with sequential ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    pub rows: Vec<ReportRow>,
}

impl ScanReport {
    /// Build the report from references collected across all files.
    ///
    /// `root` is the scanned path; file names are shown relative to it.
    pub fn build(references: Vec<DatasetReference>, root: &Path, excluded: &ExcludedNames) -> Self {
        let mut rows: Vec<ReportRow> = references
            .into_iter()
            .filter(|r| !excluded.is_transient(r.library()))
            .map(|r| ReportRow {
                id: 0,
                code_file: display_name(Path::new(&r.source_file), root),
                dataset: r.dataset_name,
                line_num: r.line_number,
                block_type: r.block_type,
                context: r.context,
            })
            .collect();

        rows.sort_by(|a, b| {
            (&a.code_file, a.line_num, &a.dataset, a.block_type, a.context).cmp(&(
                &b.code_file,
                b.line_num,
                &b.dataset,
                b.block_type,
                b.context,
            ))
        });
        rows.dedup_by(|a, b| {
            a.code_file == b.code_file && a.line_num == b.line_num && a.dataset == b.dataset
        });

        for (idx, row) in rows.iter_mut().enumerate() {
            row.id = idx + 1;
        }

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// File name as shown in the report: the path relative to the scanned
/// directory, or the base name when a single file was scanned.
pub fn display_name(path: &Path, root: &Path) -> String {
    let relative = path
        .strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty());

    match relative {
        Some(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned()),
    }
}
