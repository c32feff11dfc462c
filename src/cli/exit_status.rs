use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed. A scan succeeds even when some files
///   were skipped; those are reported as warnings.
/// - `Failure` (1): Command refused to act (e.g., config file already exists)
/// - `Error` (2): Command failed (missing path, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
