use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug)]
pub struct ScanResult {
    /// Candidate files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Resolve a root path to the source files to scan.
///
/// A file is returned as-is when its extension is recognized. A directory
/// yields its recognized entries, non-recursively unless `recursive` is set.
/// Fails when `root` does not exist.
///
/// Usable on its own without a loaded [`Config`](crate::config::Config), so
/// ignore patterns are not assumed to be validated: an invalid glob is
/// skipped (with a warning in verbose mode) instead of failing the scan.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    recursive: bool,
    verbose: bool,
) -> Result<ScanResult> {
    if !root.exists() {
        bail!("Path not found: {}", root.display());
    }

    if root.is_file() {
        let files = if is_scannable_file(root, extensions) {
            vec![root.to_path_buf()]
        } else {
            if verbose {
                eprintln!(
                    "{} Not a recognized source file: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            Vec::new()
        };
        return Ok(ScanResult {
            files,
            skipped_count: 0,
        });
    }

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && is_scannable_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| extensions.iter().any(|allowed| *allowed == ext))
}
