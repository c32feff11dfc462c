use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    config::{Config, load_config},
    core::{
        BlockMerger, CommentStripper, DatasetExtractor, DatasetReference, ExcludedNames,
        ScanReport, SourceFile, display_name, file_scanner::scan_files,
    },
    diagnostics::Diagnostic,
};

/// Output of scanning a single file.
#[derive(Debug, Default)]
pub struct FileScan {
    pub references: Vec<DatasetReference>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Output of a whole scan run.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: ScanReport,
    /// Non-fatal conditions, sorted by file.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files that were read and scanned.
    pub files_scanned: usize,
}

impl ScanOutcome {
    pub fn skipped_file_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.is_skipped_file())
            .count()
    }
}

/// Run the per-file pipeline on an already loaded source file.
///
/// `display_path` is used for diagnostics only; references keep the real path
/// so the report can compute names relative to the scan root.
pub fn scan_source(file: &SourceFile, display_path: &str, excluded: &ExcludedNames) -> FileScan {
    let cleaned = CommentStripper::strip_lines(&file.lines);
    let blocks = BlockMerger::merge(&cleaned);

    let diagnostics = blocks
        .iter()
        .filter(|block| !block.terminated)
        .map(|block| {
            Diagnostic::unterminated_block(display_path, block.block_type, block.start_line)
        })
        .collect();

    let source_file = file.path.to_string_lossy();
    let references = DatasetExtractor::new(&source_file, excluded).extract_all(&blocks);

    FileScan {
        references,
        diagnostics,
    }
}

/// Scan orchestration for one run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--recursive`)
/// 2. `.dsscanrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    pub config: Config,

    /// The scanned path (file or directory).
    pub root: PathBuf,

    /// All source files to scan, sorted by path.
    pub files: Vec<PathBuf>,

    /// Directory entries that could not be accessed during enumeration.
    pub skipped_count: usize,

    pub verbose: bool,
}

impl ScanContext {
    pub fn new(root: &Path, recursive: bool, verbose: bool) -> Result<Self> {
        if !root.exists() {
            bail!("Path not found: {}", root.display());
        }

        let config_dir = if root.is_dir() {
            root
        } else {
            root.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
        };
        let mut config = load_config(config_dir)?.config;
        if recursive {
            config.recursive = true;
        }

        let scan = scan_files(
            root,
            &config.normalized_extensions(),
            &config.ignores,
            config.recursive,
            verbose,
        )?;

        Ok(Self {
            config,
            root: root.to_path_buf(),
            files: scan.files,
            skipped_count: scan.skipped_count,
            verbose,
        })
    }

    /// Scan all files in parallel, then build the report in one pass.
    pub fn run(&self) -> ScanOutcome {
        let excluded = self.config.excluded_names();

        let per_file: Vec<(bool, FileScan)> = self
            .files
            .par_iter()
            .map(|path| self.scan_file(path, &excluded))
            .collect();

        let mut references = Vec::new();
        let mut diagnostics = Vec::new();
        let mut files_scanned = 0;
        for (read_ok, scan) in per_file {
            if read_ok {
                files_scanned += 1;
            }
            references.extend(scan.references);
            diagnostics.extend(scan.diagnostics);
        }
        diagnostics.sort();

        ScanOutcome {
            report: ScanReport::build(references, &self.root, &excluded),
            diagnostics,
            files_scanned,
        }
    }

    fn scan_file(&self, path: &Path, excluded: &ExcludedNames) -> (bool, FileScan) {
        let display_path = display_name(path, &self.root);
        match SourceFile::read(path) {
            Ok(file) => (true, scan_source(&file, &display_path, excluded)),
            Err(e) => {
                let reason = e.root_cause().to_string();
                (
                    false,
                    FileScan {
                        references: Vec::new(),
                        diagnostics: vec![Diagnostic::file_unreadable(display_path, reason)],
                    },
                )
            }
        }
    }
}

/// Scan a file or directory with configuration discovered from disk.
///
/// # Example
///
/// ```no_run
/// let outcome = dsscan::core::scan_path(std::path::Path::new("jobs"))?;
/// for row in &outcome.report.rows {
///     println!("{} {}:{}", row.dataset, row.code_file, row.line_num);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn scan_path(root: &Path) -> Result<ScanOutcome> {
    Ok(ScanContext::new(root, false, false)?.run())
}
