//! Report formatting and printing utilities.
//!
//! Separate from core logic so the scanner can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::ScanReport;
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const HEADERS: [&str; 6] = [
    "id",
    "code_file",
    "dataset",
    "line_num",
    "block_type",
    "context",
];

/// Gap between table columns.
const COLUMN_GAP: usize = 2;

/// Print the report as an aligned table to stdout.
pub fn print_table(report: &ScanReport) {
    print_table_to(report, &mut io::stdout().lock());
}

/// Print the report table to a custom writer.
///
/// Nothing is printed for an empty report.
pub fn print_table_to<W: Write>(report: &ScanReport, writer: &mut W) {
    if report.is_empty() {
        return;
    }

    let cells: Vec<[String; 6]> = report
        .rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.code_file.clone(),
                row.dataset.clone(),
                row.line_num.to_string(),
                row.block_type.to_string(),
                row.context.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect::<String>();
    let _ = writeln!(writer, "{}", header.trim_end().bold());

    for row in &cells {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect::<String>();
        let _ = writeln!(writer, "{}", line.trim_end());
    }
}

/// Print a one-line summary after the table.
pub fn print_summary_to<W: Write>(report: &ScanReport, files_scanned: usize, writer: &mut W) {
    let files = format!(
        "{} {}",
        files_scanned,
        if files_scanned == 1 { "file" } else { "files" }
    );
    let msg = if report.is_empty() {
        format!("Scanned {} - no permanent datasets found", files)
    } else {
        format!(
            "Found {} permanent {} in {}",
            report.len(),
            if report.len() == 1 {
                "dataset"
            } else {
                "datasets"
            },
            files
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print scan diagnostics.
///
/// In verbose mode every diagnostic is printed; otherwise only counts are
/// shown with a hint to rerun with `-v`.
pub fn print_diagnostics_to<W: Write>(
    diagnostics: &[Diagnostic],
    inaccessible_entries: usize,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        for diagnostic in diagnostics {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), diagnostic);
        }
        return;
    }

    let skipped = diagnostics.iter().filter(|d| d.is_skipped_file()).count() + inaccessible_entries;
    let unterminated = diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::UnterminatedBlock { .. }))
        .count();

    if skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped,
            "-v".cyan()
        );
    }
    if unterminated > 0 {
        let _ = writeln!(
            writer,
            "{} {} statement(s) have no terminating ';' (use {} for details)",
            "warning:".bold().yellow(),
            unterminated,
            "-v".cyan()
        );
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text)) + COLUMN_GAP;
    format!("{}{}", text, " ".repeat(fill))
}
