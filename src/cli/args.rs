//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find permanent datasets created in SAS source files
//! - `init`: Initialize dsscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Text,
    /// JSON array of report rows
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// SAS source file or directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Scan subdirectories too (overrides config file)
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report permanent datasets created by DATA steps and CREATE TABLE statements
    Scan(ScanCommand),
    /// Initialize a new .dsscanrc.json configuration file
    Init(InitCommand),
}
