use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, scan::scan},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command completed
/// - `Err` if the command fails (e.g., path not found, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
