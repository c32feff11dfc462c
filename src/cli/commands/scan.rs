use std::io;

use anyhow::{Context, Result};

use super::super::args::{OutputFormat, ScanCommand};
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::core::ScanContext;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ctx = ScanContext::new(&cmd.path, cmd.recursive, cmd.verbose)?;
    let outcome = ctx.run();

    report::print_diagnostics_to(
        &outcome.diagnostics,
        ctx.skipped_count,
        cmd.verbose,
        &mut io::stderr().lock(),
    );

    match cmd.format {
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            report::print_table_to(&outcome.report, &mut stdout);
            report::print_summary_to(&outcome.report, outcome.files_scanned, &mut stdout);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome.report)
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(ExitStatus::Success)
}
